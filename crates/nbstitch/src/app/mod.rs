//! Application layer orchestrating the assembly pipeline phases.

pub mod assemble;
pub mod cells;
pub mod requirements;
pub mod validate;
