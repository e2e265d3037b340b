//! Command implementations.

pub mod ir;
pub mod render;
pub mod tree;
