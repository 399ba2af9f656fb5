//! Synthetic ERP master data generation.
//!
//! Stamps materials, vendors, purchase orders and a transaction log out of
//! the static catalog in `eccgen-core`. Randomness and "now" are injected so
//! a seeded generator with a fixed clock reproduces the same dataset.

pub mod clock;
pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod output;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::{ExportResult, GenerationEngine, build_rng};
pub use errors::GenerationError;
pub use model::{DateWindow, GenerateOptions, GenerationReport, QuantityRange, TableReport};
