// puzzle/mod.rs
// Re-exports and module declarations for the puzzle controller

pub mod bonding;
pub mod puzzle;
pub use bonding::{Bond, Snap};
pub use puzzle::*;

#[cfg(test)]
mod bonding_tests;
