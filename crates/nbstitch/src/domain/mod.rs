//! Core types shared across the assembly pipeline.

pub mod errors;
pub mod model;
