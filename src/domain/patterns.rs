use super::{Cell, Grid};

/// A named pattern given as the coordinates of its alive cells.
/// Used both for seeding grids and as the base shape of a structure
/// template.
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub width: usize,
    pub height: usize,
    /// Relative coordinates of alive cells
    pub cells: Vec<(usize, usize)>,
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates.
    /// Coordinates are shifted so the bounding box starts at (0, 0).
    pub fn new(name: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let min_x = cells.iter().map(|&(x, _)| x).min().unwrap_or(0);
        let min_y = cells.iter().map(|&(_, y)| y).min().unwrap_or(0);
        let cells: Vec<_> = cells
            .into_iter()
            .map(|(x, y)| (x - min_x, y - min_y))
            .collect();

        let width = cells.iter().map(|&(x, _)| x).max().map_or(0, |x| x + 1);
        let height = cells.iter().map(|&(_, y)| y).max().map_or(0, |y| y + 1);
        Self {
            name,
            width,
            height,
            cells,
        }
    }

    /// Render the pattern's bounding box as rows of booleans
    pub fn rows(&self) -> Vec<Vec<bool>> {
        let mut rows = vec![vec![false; self.width]; self.height];
        for &(x, y) in &self.cells {
            rows[y][x] = true;
        }
        rows
    }

    /// Place pattern on grid at specified position
    pub fn place_on(&self, grid: &mut Grid, x: usize, y: usize) {
        for (dx, dy) in &self.cells {
            grid.set(x + dx, y + dy, Cell::Alive);
        }
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "glider",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "block",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "blinker",
            vec![
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "toad",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "beacon",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "lwss",
            vec![
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![glider(), block(), blinker(), toad(), beacon(), lwss()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_is_normalized() {
        // Blinker is declared on row 1; normalization drops the empty row.
        let blinker = presets::blinker();
        assert_eq!((blinker.width, blinker.height), (3, 1));
        assert_eq!(blinker.rows(), vec![vec![true, true, true]]);
    }

    #[test]
    fn test_glider_rows() {
        let rows = presets::glider().rows();
        assert_eq!(
            rows,
            vec![
                vec![false, true, false],
                vec![false, false, true],
                vec![true, true, true],
            ]
        );
    }

    #[test]
    fn test_place_on_grid() {
        let mut grid = Grid::new(8, 8);
        presets::block().place_on(&mut grid, 3, 4);

        assert_eq!(grid.count_alive(), 4);
        assert_eq!(grid.get(3, 4), Some(Cell::Alive));
        assert_eq!(grid.get(4, 5), Some(Cell::Alive));
        assert_eq!(grid.get(2, 4), Some(Cell::Dead));
    }

    #[test]
    fn test_preset_names_are_unique() {
        let names: Vec<_> = presets::all_patterns().iter().map(|p| p.name).collect();
        let mut unique = names.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }
}
