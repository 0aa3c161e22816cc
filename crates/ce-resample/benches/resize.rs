use ce_core::Image;
use ce_resample::{resize_bilinear_u8, resize_to_width_u8};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn build_ramp_u8(width: usize, height: usize) -> Image<u8> {
    let mut data = Vec::with_capacity(width * height);
    for i in 0..(width * height) {
        data.push((i % 251) as u8);
    }
    Image::from_vec(width, height, data).expect("valid image")
}

fn bench_area_shrink(c: &mut Criterion) {
    let img = build_ramp_u8(1280, 960);
    let view = img.as_view();

    c.bench_function("resize_area_u8_1280x960_to_196", |b| {
        b.iter(|| {
            let out = resize_to_width_u8(black_box(&view), 196);
            black_box(out);
        });
    });
}

fn bench_bilinear_enlarge(c: &mut Criterion) {
    let img = build_ramp_u8(196, 147);
    let view = img.as_view();

    c.bench_function("resize_bilinear_u8_196x147_to_1280x960", |b| {
        b.iter(|| {
            let out = resize_bilinear_u8(black_box(&view), 1280, 960);
            black_box(out);
        });
    });
}

criterion_group!(benches, bench_area_shrink, bench_bilinear_enlarge);
criterion_main!(benches);
