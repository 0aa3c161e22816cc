use ce_contour::{ContourApproximation, fill_contour, find_contours};
use ce_core::Image;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

/// Grid of square blobs, every third one with a hole.
fn synthetic_blobs(width: usize, height: usize) -> Image<u8> {
    let mut img = Image::new_fill(width, height, 0u8);
    for (k, cy) in (16..height.saturating_sub(16)).step_by(24).enumerate() {
        for (j, cx) in (16..width.saturating_sub(16)).step_by(24).enumerate() {
            let holed = (j + k) % 3 == 0;
            for y in cy - 8..cy + 8 {
                for x in cx - 8..cx + 8 {
                    let in_hole = holed
                        && (cy - 3..cy + 3).contains(&y)
                        && (cx - 3..cx + 3).contains(&x);
                    if !in_hole {
                        img.row_mut(y)[x] = 255;
                    }
                }
            }
        }
    }
    img
}

fn bench_find_contours(c: &mut Criterion) {
    let img = synthetic_blobs(1280, 960);
    let view = img.as_view();

    c.bench_function("find_contours_simple_1280x960", |b| {
        b.iter(|| {
            let set = find_contours(black_box(&view), ContourApproximation::Simple);
            black_box(set.len());
        });
    });
}

fn bench_fill(c: &mut Criterion) {
    let img = synthetic_blobs(1280, 960);
    let set = find_contours(&img.as_view(), ContourApproximation::Simple);
    let mut out = Image::new_fill(1280, 960, 0u8);

    c.bench_function("fill_all_outer_contours_1280x960", |b| {
        b.iter(|| {
            let mut view = out.as_view_mut();
            for id in set.iter_top_level() {
                fill_contour(&mut view, set.points(id), 255);
            }
            black_box(out.data().len());
        });
    });
}

criterion_group!(benches, bench_find_contours, bench_fill);
criterion_main!(benches);
