/// Options for projecting a point onto a polynomial curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointProjectionOptions {
    /// Number of evenly spaced samples over `[0, 1]` used to bracket stationary points
    pub initial_subdivisions: usize,
    /// Maximum number of Newton iterations per bracketed candidate
    pub refinement_iterations: u64,
}

impl Default for PointProjectionOptions {
    fn default() -> Self {
        Self {
            initial_subdivisions: 16,
            refinement_iterations: 4,
        }
    }
}

impl PointProjectionOptions {
    pub fn with_initial_subdivisions(mut self, initial_subdivisions: usize) -> Self {
        self.initial_subdivisions = initial_subdivisions;
        self
    }

    pub fn with_refinement_iterations(mut self, refinement_iterations: u64) -> Self {
        self.refinement_iterations = refinement_iterations;
        self
    }
}
