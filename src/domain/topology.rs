/// How the grid treats coordinates past its edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub enum Topology {
    /// Everything outside the grid is permanently dead.
    #[default]
    Bounded,
    /// Edges wrap around like a torus.
    Toroidal,
}

impl Topology {
    pub fn name(&self) -> &'static str {
        match self {
            Topology::Bounded => "bounded",
            Topology::Toroidal => "toroidal",
        }
    }

    /// Map a possibly out-of-range coordinate onto `[0, extent)`.
    /// Returns `None` when the coordinate falls off a bounded edge.
    pub fn resolve(&self, coord: isize, extent: usize) -> Option<usize> {
        let extent = extent as isize;
        match self {
            Topology::Bounded => (0..extent).contains(&coord).then_some(coord as usize),
            Topology::Toroidal => Some(coord.rem_euclid(extent) as usize),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_rejects_outside() {
        assert_eq!(Topology::Bounded.resolve(-1, 10), None);
        assert_eq!(Topology::Bounded.resolve(10, 10), None);
        assert_eq!(Topology::Bounded.resolve(0, 10), Some(0));
        assert_eq!(Topology::Bounded.resolve(9, 10), Some(9));
    }

    #[test]
    fn test_toroidal_wraps_one_step() {
        assert_eq!(Topology::Toroidal.resolve(-1, 10), Some(9));
        assert_eq!(Topology::Toroidal.resolve(10, 10), Some(0));
    }

    #[test]
    fn test_toroidal_wraps_far_offsets() {
        assert_eq!(Topology::Toroidal.resolve(-21, 10), Some(9));
        assert_eq!(Topology::Toroidal.resolve(35, 10), Some(5));
    }
}
