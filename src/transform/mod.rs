pub mod baseline;
pub mod metadata;
pub mod timeseries;

pub use baseline::normalize;
pub use metadata::extract;
pub use timeseries::{assemble, truncate};

/// Sampling cadence of the calorimetry cages, in minutes.
pub const TICK_MINUTES: u32 = 6;
/// First day; the `vo2` baseline is taken over this window.
pub const BASELINE_WINDOW_MINUTES: u32 = 1440;
/// Three days; later ticks are dropped from the time-series table.
pub const SERIES_WINDOW_MINUTES: u32 = 4320;
