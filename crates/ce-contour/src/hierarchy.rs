use ce_core::Point2i;

pub type ContourId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContourKind {
    Outer,
    Hole,
}

/// How many points of a traced border are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContourApproximation {
    /// Every border pixel, in tracing order.
    None,
    /// Only the end points of horizontal, vertical and diagonal runs.
    #[default]
    Simple,
}

/// Links of one contour inside the two-level hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HierarchyRecord {
    pub kind: ContourKind,
    pub parent: Option<ContourId>,
    pub first_child: Option<ContourId>,
    /// Next contour sharing the same parent (or the next top-level contour).
    pub next: Option<ContourId>,
}

/// Contours in discovery (raster) order with one hierarchy record each.
#[derive(Debug, Clone, Default)]
pub struct ContourSet {
    pub contours: Vec<Vec<Point2i>>,
    pub hierarchy: Vec<HierarchyRecord>,
}

impl ContourSet {
    pub fn len(&self) -> usize {
        self.contours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    pub fn points(&self, id: ContourId) -> &[Point2i] {
        &self.contours[id]
    }

    pub fn iter_top_level(&self) -> impl Iterator<Item = ContourId> + '_ {
        self.siblings_from(self.hierarchy.iter().position(|r| r.parent.is_none()))
    }

    pub fn iter_children(&self, id: ContourId) -> impl Iterator<Item = ContourId> + '_ {
        self.siblings_from(self.hierarchy[id].first_child)
    }

    fn siblings_from(&self, first: Option<ContourId>) -> impl Iterator<Item = ContourId> + '_ {
        std::iter::successors(first, |&i| self.hierarchy[i].next)
    }

    pub(crate) fn from_parts(
        contours: Vec<Vec<Point2i>>,
        links: Vec<(ContourKind, Option<ContourId>)>,
    ) -> Self {
        let n = contours.len();
        let mut hierarchy: Vec<HierarchyRecord> = links
            .into_iter()
            .map(|(kind, parent)| HierarchyRecord {
                kind,
                parent,
                first_child: None,
                next: None,
            })
            .collect();

        let mut last_child: Vec<Option<ContourId>> = vec![None; n];
        let mut last_top: Option<ContourId> = None;
        for id in 0..n {
            let parent = hierarchy[id].parent;
            let tail = match parent {
                Some(p) => &mut last_child[p],
                None => &mut last_top,
            };
            match tail.replace(id) {
                Some(prev) => hierarchy[prev].next = Some(id),
                None => {
                    if let Some(p) = parent {
                        hierarchy[p].first_child = Some(id);
                    }
                }
            }
        }

        Self {
            contours,
            hierarchy,
        }
    }
}

impl ContourApproximation {
    pub(crate) fn apply(self, points: Vec<Point2i>) -> Vec<Point2i> {
        let n = points.len();
        if self == Self::None || n < 3 {
            return points;
        }

        let step = |a: Point2i, b: Point2i| (b.x - a.x, b.y - a.y);
        (0..n)
            .filter(|&i| {
                let prev = points[(i + n - 1) % n];
                let next = points[(i + 1) % n];
                step(prev, points[i]) != step(points[i], next)
            })
            .map(|i| points[i])
            .collect()
    }
}
