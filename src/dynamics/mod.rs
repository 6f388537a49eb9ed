//! Per-frame motion: gravity, drag and position integration.

pub mod integrator;

pub use integrator::{Integrator, PARALLEL_INTEGRATION_THRESHOLD};
