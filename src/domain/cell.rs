/// Cell represents one binary site of the automaton.
/// Each cell is either Dead (0) or Alive (1).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Numeric state, 0 or 1, as summed by neighbor counting
    pub const fn bit(self) -> u8 {
        self as u8
    }

    /// Next state under B3/S23:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(Cell::Alive.evolve(0), Cell::Dead);
        assert_eq!(Cell::Alive.evolve(1), Cell::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(Cell::Alive.evolve(2), Cell::Alive);
        assert_eq!(Cell::Alive.evolve(3), Cell::Alive);
    }

    #[test]
    fn test_overpopulation() {
        for n in 4..=8 {
            assert_eq!(Cell::Alive.evolve(n), Cell::Dead, "alive with {n} neighbors");
        }
    }

    #[test]
    fn test_reproduction() {
        assert_eq!(Cell::Dead.evolve(3), Cell::Alive);
    }

    #[test]
    fn test_rule_table_exhaustive() {
        for n in 0..=8u8 {
            let survives = n == 2 || n == 3;
            let born = n == 3;
            assert_eq!(Cell::Alive.evolve(n).is_alive(), survives, "alive, n = {n}");
            assert_eq!(Cell::Dead.evolve(n).is_alive(), born, "dead, n = {n}");
        }
    }

    #[test]
    fn test_bits() {
        assert_eq!(Cell::Dead.bit(), 0);
        assert_eq!(Cell::Alive.bit(), 1);
        assert_eq!(Cell::from(true), Cell::Alive);
        assert_eq!(Cell::default(), Cell::Dead);
    }
}
