//! Conway's Game of Life engine with structure recognition.
//!
//! Two independent components share the [`Grid`] type: the simulation
//! engine computes generations under Conway's rules on a clamped
//! (non-wrapping) grid, and the [`StructureLibrary`] locates known
//! patterns - in any of their four rotations - inside the live grid.

// Domain layer - core simulation and matching logic
pub mod domain;

// Application layer - driver-facing state and configuration
pub mod application;

// Re-exports for convenience
pub use application::{SimConfig, SimState};
pub use domain::{Cell, ConwayRule, Grid, Match, Pattern, Rule, StructureLibrary, presets};
