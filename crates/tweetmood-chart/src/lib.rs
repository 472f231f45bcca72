//! Chart output for an aggregated sentiment split.

mod pie;

pub use pie::{ChartError, ChartRenderer, DEFAULT_OUTPUT, PieChart};
