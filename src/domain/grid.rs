use log::trace;
use rand::Rng;
use rand::distr::{Bernoulli, Distribution};
use rayon::prelude::*;

use super::{Cell, Generation, StepStrategy, Topology};
use crate::error::{Error, Result};

/// One cell buffer seen through a topology.
#[derive(Clone, Copy)]
struct Lattice<'a> {
    cells: &'a [Cell],
    width: usize,
    height: usize,
    topology: Topology,
}

impl Lattice<'_> {
    /// Total lookup: off-grid coordinates are either wrapped or dead.
    fn get(&self, col: isize, row: isize) -> Cell {
        match (
            self.topology.resolve(col, self.width),
            self.topology.resolve(row, self.height),
        ) {
            (Some(x), Some(y)) => self.cells[y * self.width + x],
            _ => Cell::Dead,
        }
    }

    /// Count live cells in the Moore neighborhood
    fn neighbor_count(&self, col: isize, row: isize) -> u8 {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(|(dx, dy)| self.get(col + dx, row + dy).bit())
            .sum()
    }
}

/// Grid owns the two generation buffers of the automaton.
///
/// `current` is the readable generation. `scratch` is only written while a
/// step is in progress and becomes `current` when the step completes, so no
/// cell is ever computed from a half-written generation.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    topology: Topology,
    current: Vec<Cell>,
    scratch: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize, topology: Topology) -> Result<Self> {
        let len = Self::cell_count(width, height).ok_or(Error::InvalidDimensions { width, height })?;
        Ok(Self {
            width,
            height,
            topology,
            current: vec![Cell::Dead; len],
            scratch: vec![Cell::Dead; len],
        })
    }

    /// Buffer length for a `width x height` grid, or `None` if either side is
    /// zero or the cells could not all be addressed with `isize` coordinates.
    pub fn cell_count(width: usize, height: usize) -> Option<usize> {
        if width == 0 || height == 0 {
            return None;
        }
        width.checked_mul(height).filter(|&len| len <= isize::MAX as usize)
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn topology(&self) -> Topology {
        self.topology
    }

    /// Only neighbor lookup depends on the topology; stored cells are untouched.
    pub fn set_topology(&mut self, topology: Topology) {
        self.topology = topology;
    }

    fn lattice(&self) -> Lattice<'_> {
        Lattice {
            cells: &self.current,
            width: self.width,
            height: self.height,
            topology: self.topology,
        }
    }

    /// Row-major index of an in-range coordinate
    fn index(&self, col: isize, row: isize) -> Option<usize> {
        let x = Topology::Bounded.resolve(col, self.width)?;
        let y = Topology::Bounded.resolve(row, self.height)?;
        Some(y * self.width + x)
    }

    /// Whether `(col, row)` lies inside `[0, width) x [0, height)`
    pub fn contains(&self, col: isize, row: isize) -> bool {
        self.index(col, row).is_some()
    }

    /// Read the current generation under the grid's topology.
    /// Never fails: bounded grids report dead cells past the edge.
    pub fn get(&self, col: isize, row: isize) -> Cell {
        self.lattice().get(col, row)
    }

    /// Write into the current generation. Coordinates are never wrapped.
    pub fn set(&mut self, col: isize, row: isize, cell: Cell) -> Result<()> {
        let idx = self.index(col, row).ok_or(Error::OutOfBounds {
            col,
            row,
            width: self.width,
            height: self.height,
        })?;
        self.current[idx] = cell;
        Ok(())
    }

    /// Live cells among the eight neighbors, in `[0, 8]`
    pub fn neighbor_count(&self, col: isize, row: isize) -> u8 {
        self.lattice().neighbor_count(col, row)
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.current.iter_mut().for_each(|cell| *cell = Cell::Dead);
        self.sync_buffers();
    }

    /// Fill every cell independently, alive with the given probability
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, probability: f64) -> Result<()> {
        let alive = Bernoulli::new(probability).map_err(|_| Error::InvalidProbability(probability))?;
        self.current
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(alive.sample(rng)));
        self.sync_buffers();
        Ok(())
    }

    /// Make the scratch buffer an exact copy of the current generation
    pub fn sync_buffers(&mut self) {
        self.scratch.copy_from_slice(&self.current);
    }

    /// Advance exactly one generation.
    ///
    /// Every next state is computed from the untouched current buffer into
    /// the scratch buffer, then the two buffers trade places.
    pub fn advance(&mut self, strategy: StepStrategy) {
        let width = self.width;
        let previous = Lattice {
            cells: &self.current,
            width,
            height: self.height,
            topology: self.topology,
        };
        let next_row = |(row, cells): (usize, &mut [Cell])| {
            for (col, cell) in cells.iter_mut().enumerate() {
                let (x, y) = (col as isize, row as isize);
                *cell = previous.get(x, y).evolve(previous.neighbor_count(x, y));
            }
        };

        match strategy {
            StepStrategy::Serial => self.scratch.chunks_mut(width).enumerate().for_each(next_row),
            StepStrategy::Parallel => self
                .scratch
                .par_chunks_mut(width)
                .enumerate()
                .for_each(next_row),
        }

        std::mem::swap(&mut self.current, &mut self.scratch);
        trace!("advanced {}x{} grid ({})", self.width, self.height, strategy.name());
    }

    /// Number of live cells in the current generation
    pub fn population(&self) -> usize {
        self.current.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Independent copy of the current generation
    pub fn snapshot(&self) -> Generation {
        Generation::new(self.width, self.height, self.current.clone())
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.current
            .iter()
            .enumerate()
            .map(|(i, &cell)| (i % self.width, i / self.width, cell))
    }
}
