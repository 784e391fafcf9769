use super::Cell;

/// Independent copy of one generation, published to renderers and other
/// readers. Holds no reference back into the grid that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Generation {
    pub(crate) fn new(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, cells }
    }

    /// Get dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[y * self.width + x])
    }

    /// Row-major cell states, indexed by `row * width + col`
    pub fn as_slice(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (i % self.width, i / self.width, cell))
    }

    /// Positions of the live cells, row-major
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Plain-text picture: one line per row, `o` alive and `.` dead.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.cells.chunks(self.width) {
            out.extend(row.iter().map(|cell| if cell.is_alive() { 'o' } else { '.' }));
            out.push('\n');
        }
        out
    }
}
