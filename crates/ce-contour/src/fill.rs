use ce_core::{ImageViewMut, Point2i, Rect};

const OPEN: u8 = 0;
const BOUNDARY: u8 = 1;
const OUTSIDE: u8 = 2;

/// Paints the closed polygon `points` and its interior with `value`.
///
/// Consecutive points are joined by unit steps, so horizontal, vertical and
/// diagonal runs (as produced by border tracing) are reproduced exactly.
/// Pixels outside the image are skipped.
pub fn fill_contour(img: &mut ImageViewMut<'_, u8>, points: &[Point2i], value: u8) {
    let Some(bbox) = Rect::bounding(points) else {
        return;
    };

    // Local grid with a one-cell margin so the outside is connected.
    let origin = Point2i::new(bbox.x - 1, bbox.y - 1);
    let gw = bbox.width as usize + 2;
    let gh = bbox.height as usize + 2;
    let mut cells = vec![OPEN; gw * gh];
    let cell = |p: Point2i| (p.y - origin.y) as usize * gw + (p.x - origin.x) as usize;

    for (i, &a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        let step = Point2i::new((b.x - a.x).signum(), (b.y - a.y).signum());
        let mut p = a;
        cells[cell(p)] = BOUNDARY;
        while p != b {
            if p.x != b.x {
                p.x += step.x;
            }
            if p.y != b.y {
                p.y += step.y;
            }
            cells[cell(p)] = BOUNDARY;
        }
    }

    flood_outside(&mut cells, gw, gh);

    let (width, height) = (img.width(), img.height());
    for gy in 1..gh - 1 {
        let y = origin.y + gy as i32;
        if y < 0 || y as usize >= height {
            continue;
        }
        let row = img.row_mut(y as usize);
        for gx in 1..gw - 1 {
            let x = origin.x + gx as i32;
            if x < 0 || x as usize >= width {
                continue;
            }
            if cells[gy * gw + gx] != OUTSIDE {
                row[x as usize] = value;
            }
        }
    }
}

/// 4-connected flood from the grid corner through open cells.
fn flood_outside(cells: &mut [u8], gw: usize, gh: usize) {
    let mut stack = vec![0usize];
    cells[0] = OUTSIDE;
    while let Some(i) = stack.pop() {
        let (x, y) = (i % gw, i / gw);
        let mut visit = |j: usize| {
            if cells[j] == OPEN {
                cells[j] = OUTSIDE;
                stack.push(j);
            }
        };
        if x > 0 {
            visit(i - 1);
        }
        if x + 1 < gw {
            visit(i + 1);
        }
        if y > 0 {
            visit(i - gw);
        }
        if y + 1 < gh {
            visit(i + gw);
        }
    }
}
