// ⚙️ Runtime Configuration
// Filled from the CLI (flags + env vars) in main; sessions only read it.

use crate::temperature::DEFAULT_PRECISION;

pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Decimal places for temperature results
    pub precision: u32,

    /// Run each session's demonstration section before prompting
    pub show_demo: bool,

    /// Print bills as JSON instead of the receipt
    pub json: bool,

    /// `tracing` env-filter directive
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            precision: DEFAULT_PRECISION,
            show_demo: true,
            json: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_demo(mut self, show_demo: bool) -> Self {
        self.show_demo = show_demo;
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}
