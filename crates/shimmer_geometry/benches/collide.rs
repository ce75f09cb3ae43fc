use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shimmer_geometry::{rect_collide, Point, Rect};

fn bench_rect_collide(c: &mut Criterion) {
    let p = Rect::new(-50.0, -25.0, 100.0, 50.0);
    let q = Rect::new(30.0, 10.0, 20.0, 20.0);
    let origin = Point::new(50.0, 25.0);

    c.bench_function("rect_collide_axis_aligned", |b| {
        b.iter(|| rect_collide(black_box(0.0), black_box(&p), black_box(&q), origin))
    });

    c.bench_function("rect_collide_rotated_hit", |b| {
        b.iter(|| rect_collide(black_box(0.4), black_box(&p), black_box(&q), origin))
    });

    c.bench_function("rect_collide_bbox_reject", |b| {
        let far = Rect::new(500.0, 500.0, 20.0, 20.0);
        b.iter(|| rect_collide(black_box(0.4), black_box(&p), black_box(&far), origin))
    });
}

criterion_group!(benches, bench_rect_collide);
criterion_main!(benches);
