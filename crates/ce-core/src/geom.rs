/// Integer pixel coordinate (`x` = column, `y` = row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point2i {
    pub x: i32,
    pub y: i32,
}

impl Point2i {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned integer rectangle; `width`/`height` count pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Smallest rectangle covering every point, or `None` for an empty set.
    pub fn bounding(points: &[Point2i]) -> Option<Self> {
        let first = points.first()?;
        let (mut x0, mut y0, mut x1, mut y1) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            x0 = x0.min(p.x);
            y0 = y0.min(p.y);
            x1 = x1.max(p.x);
            y1 = y1.max(p.y);
        }

        Some(Self {
            x: x0,
            y: y0,
            width: x1 - x0 + 1,
            height: y1 - y0 + 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Point2i, Rect};

    #[test]
    fn bounding_rect_is_inclusive() {
        let pts = [Point2i::new(3, 4), Point2i::new(1, 9), Point2i::new(5, 6)];
        let r = Rect::bounding(&pts).expect("non-empty");

        assert_eq!(
            r,
            Rect {
                x: 1,
                y: 4,
                width: 5,
                height: 6
            }
        );
        assert!(Rect::bounding(&[]).is_none());
    }
}
