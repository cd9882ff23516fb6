mod boundary;
mod cell;
mod error;
mod grid;
pub mod patterns;
mod rules;
mod structures;

pub use boundary::BoundaryContact;
pub use cell::Cell;
pub use error::{GridError, TemplateError};
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use rules::{ConwayRule, Rule, default_rule};
pub use structures::{Match, StructureLibrary, Template};
