// piece/mod.rs
// Re-exports for the piece module

mod types;
mod connector;

pub use types::*;
pub use connector::*;

#[cfg(test)]
#[path = "tests/connector_points.rs"]
mod connector_points;

#[cfg(test)]
#[path = "tests/placement.rs"]
mod placement;
