//! Input and output value types for the simulation engine.

mod points;

pub use points::*;
