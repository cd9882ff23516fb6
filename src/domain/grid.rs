use super::boundary::{BoundaryContact, NEIGHBOR_OFFSETS};
use super::{Cell, GridError, rules::Rule};
use rayon::prelude::*;

/// Grid manages the 2D cellular automaton grid.
/// Evolution is functional: each generation is computed into a fresh
/// buffer from the current one, so no cell ever sees a partially-updated
/// neighborhood. The grid edge is clamped, not wrapped - cells outside
/// the grid count as dead.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Build a grid from nested rows of booleans.
    /// Rejects empty input and ragged rows, so every constructed grid is
    /// rectangular and at least 1x1.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    got: cells.len(),
                });
            }
        }

        let cells = rows
            .iter()
            .flatten()
            .map(|&alive| Cell::from(alive))
            .collect();

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[self.get_index(x, y)])
    }

    /// Set cell at position (mutable for painting)
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Count live neighbors among the up-to-8 surrounding cells.
    /// Offsets leaving the grid are skipped via boundary classification,
    /// which also keeps degenerate 1xN and Nx1 grids in bounds.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        let contact = BoundaryContact::classify(x, y, self.width, self.height);

        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dx, dy)| contact.admits(dx, dy))
            .map(|&(dx, dy)| {
                let nx = (x as i32 + dx) as usize;
                let ny = (y as i32 + dy) as usize;
                self.cells[self.get_index(nx, ny)]
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Pure functional evolution - returns new grid (serial)
    pub fn evolve(&self, rule: &dyn Rule) -> Self {
        let cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| {
                let current = self.cells[self.get_index(x, y)];
                let neighbors = self.count_live_neighbors(x, y);
                rule.evolve(current, neighbors)
            })
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Parallel evolution using rayon, row by row.
    /// Produces the same result as `evolve`; worth it for large grids.
    pub fn evolve_parallel(&self, rule: &dyn Rule) -> Self {
        let cells: Vec<Cell> = (0..self.height)
            .into_par_iter()
            .flat_map_iter(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| {
                let current = self.cells[self.get_index(x, y)];
                let neighbors = self.count_live_neighbors(x, y);
                rule.evolve(current, neighbors)
            })
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Clear all cells to dead state
    pub fn clear(mut self) -> Self {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
        self
    }

    /// Randomize grid (30% chance of alive)
    pub fn randomize(mut self) -> Self {
        use rand::Rng;
        let mut rng = rand::rng();

        self.cells.iter_mut().for_each(|cell| {
            *cell = Cell::from(rng.random_bool(0.3));
        });
        self
    }

    /// Count total alive cells
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.cells[self.get_index(x, y)]))
    }
}
