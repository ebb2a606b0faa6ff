use criterion::{Criterion, black_box, criterion_group, criterion_main};
use css_clamper::{ClampExpression, ClampOptions, Clamper, clampify, compute_fluid_clamp};

fn bench_clampify(c: &mut Criterion) {
    let sizes = [("16px", "24px"), ("1rem", "6rem"), ("16px", "5px")];

    c.bench_function("clampify_default_viewport", |b| {
        b.iter(|| {
            for (min, max) in sizes {
                black_box(clampify(black_box(min), black_box(max)));
            }
        });
    });

    let options = ClampOptions::new("390px", "1512px").extend(Some("320px"), Some("1920px"));
    c.bench_function("compute_fluid_clamp_extended", |b| {
        b.iter(|| {
            black_box(compute_fluid_clamp(
                black_box("18px"),
                black_box("30px"),
                black_box(&options),
            ));
        });
    });
}

fn bench_clamper(c: &mut Criterion) {
    let clamper = Clamper::new("20rem", "120rem");
    let scale: Vec<(String, String)> = (1..=12)
        .map(|i| (format!("{}px", 10 + i), format!("{}px", 12 + 2 * i)))
        .collect();

    c.bench_function("clamper_type_scale", |b| {
        b.iter(|| {
            for (min, max) in &scale {
                black_box(clamper.clamp(black_box(min), black_box(max)));
            }
        });
    });
}

fn bench_resolve(c: &mut Criterion) {
    let expr: ClampExpression = clampify("16px", "24px").parse().unwrap();
    let viewports: Vec<f64> = (0..200).map(|i| 100.0 + i as f64 * 25.0).collect();

    c.bench_function("resolve_px_vector", |b| {
        b.iter(|| {
            for &vw in &viewports {
                black_box(expr.resolve_px(black_box(vw)));
            }
        });
    });
}

criterion_group!(benches, bench_clampify, bench_clamper, bench_resolve);
criterion_main!(benches);
