pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use frameworks::config::HarnessConfig;
pub use frameworks::harness::{HarnessError, RunSummary, run, run_with_config};
