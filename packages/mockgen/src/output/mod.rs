//! Output Module
//!
//! Text emission for generated source files

pub mod emitter;

pub use emitter::Emitter;
