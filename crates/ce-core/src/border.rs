#[derive(Debug, Clone, PartialEq)]
pub enum BorderMode<T> {
    /// Replicate the nearest edge sample.
    Clamp,
    Constant(T),
    /// Mirror around the edge sample without repeating it (`dcb|abcd|cba`).
    Reflect101,
}

/// Maps a possibly out-of-range index into `[0, len)`.
///
/// Returns `None` for `Constant` (the caller substitutes the constant) and for
/// empty axes.
pub fn map_index<T>(i: isize, len: usize, mode: &BorderMode<T>) -> Option<usize> {
    if len == 0 {
        return None;
    }

    match mode {
        BorderMode::Constant(_) => {
            if i < 0 || i as usize >= len {
                None
            } else {
                Some(i as usize)
            }
        }
        BorderMode::Clamp => Some(i.clamp(0, len as isize - 1) as usize),
        BorderMode::Reflect101 => {
            if len == 1 {
                return Some(0);
            }

            let period = (2 * len - 2) as isize;
            let r = i.rem_euclid(period) as usize;
            if r < len { Some(r) } else { Some(2 * len - 2 - r) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BorderMode, map_index};

    #[test]
    fn clamp_replicates_edges() {
        let mode = BorderMode::<u8>::Clamp;

        assert_eq!(map_index(-3, 5, &mode), Some(0));
        assert_eq!(map_index(2, 5, &mode), Some(2));
        assert_eq!(map_index(5, 5, &mode), Some(4));
        assert_eq!(map_index(99, 5, &mode), Some(4));
        assert_eq!(map_index(0, 0, &mode), None);
    }

    #[test]
    fn constant_only_maps_in_range() {
        let mode = BorderMode::Constant(7u8);

        assert_eq!(map_index(-1, 4, &mode), None);
        assert_eq!(map_index(3, 4, &mode), Some(3));
        assert_eq!(map_index(4, 4, &mode), None);
    }

    #[test]
    fn reflect101_mirrors_without_repeating_edge() {
        let mode = BorderMode::<f32>::Reflect101;

        for i in -4..=4 {
            assert_eq!(map_index(i, 1, &mode), Some(0));
        }

        // 7-tap kernels on a 5-wide row reach three samples past each edge.
        let cases = [(-3, 3), (-2, 2), (-1, 1), (0, 0), (4, 4), (5, 3), (6, 2), (7, 1)];
        for (i, expected) in cases {
            assert_eq!(map_index(i, 5, &mode), Some(expected), "index {i}");
        }
    }
}
