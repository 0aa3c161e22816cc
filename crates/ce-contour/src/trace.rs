use ce_core::{ImageView, Point2i};

use crate::hierarchy::{ContourApproximation, ContourId, ContourKind, ContourSet};

// Direction codes increase counterclockwise on screen (y down).
const DX: [isize; 8] = [1, 1, 0, -1, -1, -1, 0, 1];
const DY: [isize; 8] = [0, -1, -1, -1, 0, 1, 1, 1];
const EAST: usize = 0;
const WEST: usize = 4;

/// Label of the virtual frame around the image.
const FRAME: i32 = 1;

/// Traces every border of the non-zero pixels of `img`.
pub fn find_contours(img: &ImageView<'_, u8>, approx: ContourApproximation) -> ContourSet {
    let (w, h) = img.dims();
    if w == 0 || h == 0 {
        return ContourSet::default();
    }

    let mut grid = LabelGrid::from_binary(img);
    let mut contours: Vec<Vec<Point2i>> = Vec::new();
    let mut kinds: Vec<ContourKind> = Vec::new();
    // Parent in the full nesting tree; flattened to two levels at the end.
    let mut tree_parents: Vec<Option<ContourId>> = Vec::new();

    let mut nbd = FRAME;
    for y in 1..=h {
        let mut lnbd = FRAME;
        for x in 1..=w {
            let p = y * grid.stride + x;
            let f = grid.labels[p];
            if f == 0 {
                continue;
            }

            let start = if f == 1 && grid.labels[p - 1] == 0 {
                Some((ContourKind::Outer, WEST))
            } else if f >= 1 && grid.labels[p + 1] == 0 {
                if f > 1 {
                    lnbd = f;
                }
                Some((ContourKind::Hole, EAST))
            } else {
                None
            };

            if let Some((kind, from)) = start {
                nbd += 1;
                let parent = nesting_parent(kind, lnbd, &kinds, &tree_parents);
                let points = grid.follow_border(p, from, nbd);

                contours.push(approx.apply(points));
                kinds.push(kind);
                tree_parents.push(parent);
            }

            let f = grid.labels[p];
            if f != 1 {
                lnbd = f.abs();
            }
        }
    }

    let links = kinds
        .iter()
        .zip(&tree_parents)
        .map(|(&kind, &parent)| match kind {
            ContourKind::Outer => (kind, None),
            ContourKind::Hole => (kind, parent),
        })
        .collect();
    ContourSet::from_parts(contours, links)
}

/// Parent of a new border given the last border crossed on its row.
fn nesting_parent(
    kind: ContourKind,
    lnbd: i32,
    kinds: &[ContourKind],
    tree_parents: &[Option<ContourId>],
) -> Option<ContourId> {
    let prev = usize::try_from(lnbd).ok()?.checked_sub(2)?;
    let prev_kind = *kinds.get(prev)?;
    if prev_kind == kind {
        tree_parents[prev]
    } else {
        Some(prev)
    }
}

/// Binary image with a one-pixel zero frame; tracing rewrites labels in place.
struct LabelGrid {
    labels: Vec<i32>,
    stride: usize,
    offsets: [isize; 8],
}

impl LabelGrid {
    fn from_binary(img: &ImageView<'_, u8>) -> Self {
        let stride = img.width() + 2;
        let mut labels = vec![0i32; stride * (img.height() + 2)];
        for y in 0..img.height() {
            let dst = &mut labels[(y + 1) * stride + 1..(y + 1) * stride + 1 + img.width()];
            for (l, &v) in dst.iter_mut().zip(img.row(y)) {
                *l = i32::from(v != 0);
            }
        }

        let mut offsets = [0isize; 8];
        for (d, off) in offsets.iter_mut().enumerate() {
            *off = DY[d] * stride as isize + DX[d];
        }

        Self {
            labels,
            stride,
            offsets,
        }
    }

    #[inline]
    fn neighbor(&self, p: usize, dir: usize) -> usize {
        // The zero frame keeps every foreground neighbour in bounds.
        p.wrapping_add_signed(self.offsets[dir])
    }

    #[inline]
    fn point(&self, p: usize) -> Point2i {
        Point2i::new(
            (p % self.stride) as i32 - 1,
            (p / self.stride) as i32 - 1,
        )
    }

    /// Follows the border through `start`, entered from the zero neighbour
    /// in direction `from`, and labels its pixels with `nbd`.
    fn follow_border(&mut self, start: usize, from: usize, nbd: i32) -> Vec<Point2i> {
        let mut points = vec![self.point(start)];

        // Clockwise sweep for the first foreground neighbour.
        let Some(first_dir) = (0..8)
            .map(|k| (from + 8 - k) % 8)
            .find(|&d| self.labels[self.neighbor(start, d)] != 0)
        else {
            self.labels[start] = -nbd;
            return points;
        };
        let last = self.neighbor(start, first_dir);

        let mut cur = start;
        let mut back = first_dir;
        loop {
            // Counterclockwise sweep starting just after the pixel we came from.
            let mut east_is_zero = false;
            let mut dir = back;
            for k in 1..=8 {
                let d = (back + k) % 8;
                if self.labels[self.neighbor(cur, d)] != 0 {
                    dir = d;
                    break;
                }
                if d == EAST {
                    east_is_zero = true;
                }
            }

            if east_is_zero {
                self.labels[cur] = -nbd;
            } else if self.labels[cur] == 1 {
                self.labels[cur] = nbd;
            }

            let next = self.neighbor(cur, dir);
            if next == start && cur == last {
                break;
            }

            points.push(self.point(next));
            back = (dir + 4) % 8;
            cur = next;
        }

        points
    }
}
