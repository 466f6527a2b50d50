//! Instantiation context configuration

/// Default cell budget for one instantiated array (2^26 cells, 256 MiB of `u32`).
pub const DEFAULT_MAX_CELLS: usize = 1 << 26;

/// Configuration for instantiation.
///
/// Array memory grows with the square of the scale, so every instantiation is
/// checked against a cell budget before anything is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstantiationContext {
    /// Maximum number of cells a single instantiated array may hold
    pub max_cells: usize,
}

impl Default for InstantiationContext {
    fn default() -> Self {
        Self {
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

impl InstantiationContext {
    /// Create a context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom cell budget.
    pub fn with_max_cells(max_cells: usize) -> Self {
        Self { max_cells }
    }

    /// Create a context without any cell budget.
    pub fn unbounded() -> Self {
        Self {
            max_cells: usize::MAX,
        }
    }

    /// Check whether an array of `cells` cells fits the budget.
    pub fn allows(&self, cells: usize) -> bool {
        cells <= self.max_cells
    }
}
