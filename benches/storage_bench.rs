use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use bezier_toy::{
    parse_curve_document, write_curve_document, Argb, ConstrainedReducer, CurveDocument,
    ReducedCurve, ReducerRegistry, UnconstrainedReducer,
};
use glam::DVec2;
use std::hint::black_box;

fn build_synthetic_document(point_count: usize) -> CurveDocument {
    let mut document = CurveDocument::new(Argb(0xFF20_2020));

    for index in 0..point_count {
        let t = index as f64 * 0.01;
        document
            .base_curve
            .points
            .push(DVec2::new(t * 13.7 + 0.25, (t * 3.1).sin() * 250.0));
    }

    for degree in 2..6 {
        document.reduced_curves.push(ReducedCurve::new(
            Box::new(ConstrainedReducer::new(1, 2)),
            degree,
            Argb::BLUE,
        ));
        document.reduced_curves.push(ReducedCurve::new(
            Box::new(UnconstrainedReducer),
            degree,
            Argb::RED,
        ));
    }

    document
}

fn bench_fixture_parsing(c: &mut Criterion) {
    let registry = ReducerRegistry::with_builtin_reducers();
    let xml_content = include_str!("../tests/fixtures/simple_curve.xml");

    c.bench_function("xml_parse_simple_curve", |b| {
        b.iter(|| {
            let document = parse_curve_document(black_box(xml_content), &registry)
                .expect("XML parse failed");
            black_box(document.base_curve.point_count())
        })
    });
}

fn bench_save_and_load(c: &mut Criterion) {
    let registry = ReducerRegistry::with_builtin_reducers();
    let mut group = c.benchmark_group("curve_storage");

    for &point_count in &[1_000usize, 10_000usize] {
        let document = build_synthetic_document(point_count);
        let xml_content = write_curve_document(&document, &registry).expect("XML write failed");

        group.bench_with_input(
            BenchmarkId::new("write", point_count),
            &document,
            |b, document| {
                b.iter(|| {
                    let xml = write_curve_document(black_box(document), &registry)
                        .expect("XML write failed");
                    black_box(xml.len())
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("parse", point_count),
            &xml_content,
            |b, xml_content| {
                b.iter(|| {
                    let document = parse_curve_document(black_box(xml_content), &registry)
                        .expect("XML parse failed");
                    black_box(document.reduced_curve_count())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_fixture_parsing, bench_save_and_load);
criterion_main!(benches);
