use super::SimConfig;
use crate::domain::{Grid, Rule, default_rule};
use log::debug;

/// SimState owns the simulation's persistent state: the current grid,
/// the active rule, and the generation counter. One writer per instance;
/// pacing (tick rate, pausing) belongs to the driver.
pub struct SimState {
    pub grid: Grid,
    pub rule: Box<dyn Rule>,
    pub is_running: bool,
    generation: u64,
}

impl SimState {
    /// Create new simulation state with given grid dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
            rule: default_rule(),
            is_running: false,
            generation: 0,
        }
    }

    /// Create simulation state from a driver configuration
    pub fn from_config(config: &SimConfig) -> Self {
        let config = config.clone().clamped();
        Self::new(config.width, config.height)
    }

    /// Generations advanced since creation or the last reset
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance the grid by one generation and return the new generation
    /// count. The counter increments exactly once per call; structure
    /// searches on the grid never touch it.
    pub fn step(&mut self) -> u64 {
        self.grid = self.grid.evolve(self.rule.as_ref());
        self.generation += 1;
        self.generation
    }

    /// Reset the generation counter without touching the grid
    pub fn reset_generation(&mut self) {
        debug!("generation counter reset at {}", self.generation);
        self.generation = 0;
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Clear grid, reset generation counter, and pause
    pub fn clear(mut self) -> Self {
        self.grid = self.grid.clear();
        self.generation = 0;
        self.is_running = false;
        self
    }

    /// Randomize grid, reset generation counter, and pause
    pub fn randomize(mut self) -> Self {
        self.grid = self.grid.randomize();
        self.generation = 0;
        self.is_running = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, StructureLibrary};

    #[test]
    fn test_generation_counts_steps() {
        let mut state = SimState::new(8, 8);
        assert_eq!(state.generation(), 0);

        assert_eq!(state.step(), 1);
        assert_eq!(state.step(), 2);
        assert_eq!(state.step(), 3);
        assert_eq!(state.generation(), 3);

        state.reset_generation();
        assert_eq!(state.generation(), 0);
    }

    #[test]
    fn test_searching_does_not_advance_generation() {
        let mut state = SimState::new(8, 8);
        state.grid.set(3, 3, Cell::Alive);
        state.step();

        let library = StructureLibrary::with_presets().unwrap();
        let _ = library.find_all(&state.grid);
        let _ = library.find_all(&state.grid);
        assert_eq!(state.generation(), 1);
    }

    #[test]
    fn test_step_applies_conway_rule() {
        let mut state = SimState::new(5, 5);
        state.grid.set(1, 2, Cell::Alive);
        state.grid.set(2, 2, Cell::Alive);
        state.grid.set(3, 2, Cell::Alive);

        state.step();
        assert_eq!(state.grid.get(2, 1), Some(Cell::Alive));
        assert_eq!(state.grid.get(2, 2), Some(Cell::Alive));
        assert_eq!(state.grid.get(2, 3), Some(Cell::Alive));
        assert_eq!(state.grid.count_alive(), 3);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut state = SimState::new(8, 8).toggle_running();
        state.grid.set(2, 2, Cell::Alive);
        state.step();

        let state = state.clear();
        assert_eq!(state.grid.count_alive(), 0);
        assert_eq!(state.generation(), 0);
        assert!(!state.is_running);
    }

    #[test]
    fn test_from_config_clamps_dimensions() {
        let config = SimConfig {
            width: 0,
            height: 16,
            updates_per_second: 30,
        };
        let state = SimState::from_config(&config);
        assert_eq!(state.grid.dimensions(), (1, 16));
    }
}
