pub mod quantity;
pub mod sweep_engine;

pub use quantity::Quantity;
pub use sweep_engine::{sweep, sweep_with, SpotSweep, SweepConfig, SweepSeries};
