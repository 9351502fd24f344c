//! Per-cycle decay of the refinement parameters.

use super::options::{BundlingParams, SUBDIVISION_RATE};

/// Step size, pass count and subdivision resolution for the current cycle.
///
/// Seeded from [`BundlingParams`] and advanced once per completed cycle: the
/// step halves, the pass count decays by `iteration_rate`, and the interior
/// point count multiplies by the subdivision rate. The pre-cycle resolution
/// starts at 0.5 so the first subdivision reads the two seeded endpoints.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CycleSchedule {
    step: f32,
    iterations: f32,
    iteration_rate: f32,
    p: u32,
    old_p: f32,
}

impl CycleSchedule {
    pub fn new(params: &BundlingParams) -> Self {
        Self {
            step: params.step_size,
            iterations: params.iterations as f32,
            iteration_rate: params.iteration_rate,
            p: params.subdivision_seed,
            old_p: 0.5,
        }
    }

    /// Maximum displacement per update pass in this cycle.
    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Update passes to run this cycle, truncated to whole passes.
    #[inline]
    pub fn iteration_count(&self) -> usize {
        self.iterations as usize
    }

    /// Control points per edge active in this cycle, including endpoints.
    #[inline]
    pub fn active_points(&self) -> usize {
        self.p as usize + 2
    }

    /// Control points per edge before this cycle's subdivision.
    #[inline]
    pub fn previous_points(&self) -> usize {
        self.old_p as usize + 2
    }

    /// Advance to the next cycle's parameters.
    pub fn advance(&mut self) {
        self.step *= 0.5;
        self.iterations *= self.iteration_rate;
        self.old_p = self.p as f32;
        self.p *= SUBDIVISION_RATE;
    }
}
