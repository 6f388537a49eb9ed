//! Utility helpers: handle arena, 2D math extensions, and logging.

pub mod allocator;
pub mod logging;
pub mod math;

pub use allocator::{Arena, Handle};
pub use math::*;
