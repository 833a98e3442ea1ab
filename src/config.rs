/// Significant digits kept by every intermediate decimal operation
pub const WORKING_PRECISION: u64 = 100;

pub const DEFAULT_DISPLAY_PRECISION: u32 = 20;

/// Evaluation settings supplied by the caller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Number of fractional digits the final result is rounded to (half up)
    pub display_precision: u32,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            display_precision: DEFAULT_DISPLAY_PRECISION,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_display_precision(mut self, digits: u32) -> Self {
        self.display_precision = digits;
        self
    }
}
