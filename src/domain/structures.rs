//! Structure recognition: locating known patterns inside a live grid.
//!
//! Each registered pattern is padded with a one-cell dead ring and
//! pre-rotated into its four orientations at registration time; a search
//! then slides every orientation over the grid and reports exact hits.
//! The dead ring means a structure only matches when it is isolated from
//! adjacent live cells.

use super::{Cell, Grid, TemplateError};
use log::debug;

/// A structure pattern in one fixed orientation, stored with its dead
/// padding ring already applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    width: usize,
    height: usize,
    /// Row-major cell states, padding included
    cells: Vec<bool>,
}

impl Template {
    /// Build a padded template from unpadded pattern rows.
    /// The rows must be rectangular and contain at least one live cell.
    fn from_rows(name: &str, rows: &[Vec<bool>]) -> Result<Self, TemplateError> {
        let base_height = rows.len();
        let base_width = rows.first().map_or(0, Vec::len);
        if base_height == 0 || base_width == 0 {
            return Err(TemplateError::Empty {
                name: name.to_owned(),
            });
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != base_width {
                return Err(TemplateError::Ragged {
                    name: name.to_owned(),
                    row,
                    expected: base_width,
                    got: cells.len(),
                });
            }
        }
        if !rows.iter().flatten().any(|&alive| alive) {
            return Err(TemplateError::NoLiveCells {
                name: name.to_owned(),
            });
        }

        // Pad with one ring of dead cells on all four sides.
        let width = base_width + 2;
        let height = base_height + 2;
        let mut cells = vec![false; width * height];
        for (y, row) in rows.iter().enumerate() {
            for (x, &alive) in row.iter().enumerate() {
                cells[(y + 1) * width + (x + 1)] = alive;
            }
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Padded dimensions of this orientation
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn get(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.width + x]
    }

    /// Rotate 90 degrees clockwise. A w x h template becomes h x w;
    /// four applications return the original.
    fn rotated(&self) -> Self {
        let (w, h) = (self.width, self.height);
        let mut cells = vec![false; w * h];
        for y in 0..w {
            for x in 0..h {
                cells[y * h + x] = self.get(y, h - 1 - x);
            }
        }

        Self {
            width: h,
            height: w,
            cells,
        }
    }

    /// Check this orientation against the grid with its top-left corner
    /// at (ox, oy). Every cell, dead ring included, must agree exactly.
    /// The caller guarantees the template lies fully inside the grid.
    fn matches_at(&self, grid: &Grid, ox: usize, oy: usize) -> bool {
        for y in 0..self.height {
            for x in 0..self.width {
                let alive = grid.get(ox + x, oy + y).is_some_and(Cell::is_alive);
                if alive != self.get(x, y) {
                    return false;
                }
            }
        }
        true
    }
}

/// One located structure occurrence: a point-in-time snapshot, never
/// live-updating.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    /// Name of the matched structure
    pub name: String,
    /// Top-left corner of the matched (padded) area in the grid
    pub x: usize,
    pub y: usize,
    /// Dimensions of the matched orientation
    pub width: usize,
    pub height: usize,
    /// Quarter turns applied to the base template (0..=3)
    pub rotation: usize,
}

struct StructureEntry {
    name: String,
    /// Base template plus its 1-3 quarter-turn rotations
    orientations: [Template; 4],
}

/// Ordered collection of named structure templates.
/// Built once at startup and queried many times; rotations are
/// precomputed here rather than per search.
#[derive(Default)]
pub struct StructureLibrary {
    entries: Vec<StructureEntry>,
}

impl StructureLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a library populated with the stock structures
    /// (glider and block).
    pub fn with_presets() -> Result<Self, TemplateError> {
        use super::patterns::presets;

        let mut library = Self::new();
        for pattern in [presets::glider(), presets::block()] {
            library.register(pattern.name, &pattern.rows())?;
        }
        Ok(library)
    }

    /// Register a named structure from its unpadded pattern rows.
    /// Validation and rotation happen here, once; malformed patterns are
    /// rejected without touching the library.
    pub fn register(&mut self, name: &str, rows: &[Vec<bool>]) -> Result<(), TemplateError> {
        let base = Template::from_rows(name, rows)?;
        let r1 = base.rotated();
        let r2 = r1.rotated();
        let r3 = r2.rotated();

        let (width, height) = base.dimensions();
        debug!("registered structure \"{name}\" ({width}x{height} padded, 4 orientations)");

        self.entries.push(StructureEntry {
            name: name.to_owned(),
            orientations: [base, r1, r2, r3],
        });
        Ok(())
    }

    /// Number of registered structures
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no structures are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered structure names, in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Find every occurrence of every registered structure in the grid.
    ///
    /// Each orientation slides over all origins where it fits; an
    /// orientation larger than the grid simply contributes nothing.
    /// Overlapping hits are all reported and identical orientations of a
    /// symmetric template each report their own hit - no deduplication.
    pub fn find_all(&self, grid: &Grid) -> Vec<Match> {
        let (grid_width, grid_height) = grid.dimensions();
        let mut matches = Vec::new();

        for entry in &self.entries {
            for (rotation, template) in entry.orientations.iter().enumerate() {
                let (width, height) = template.dimensions();
                if width > grid_width || height > grid_height {
                    continue;
                }

                for oy in 0..=grid_height - height {
                    for ox in 0..=grid_width - width {
                        if template.matches_at(grid, ox, oy) {
                            matches.push(Match {
                                name: entry.name.clone(),
                                x: ox,
                                y: oy,
                                width,
                                height,
                                rotation,
                            });
                        }
                    }
                }
            }
        }

        debug!(
            "structure search over {grid_width}x{grid_height} grid found {} match(es)",
            matches.len()
        );
        matches
    }
}
