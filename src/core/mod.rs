//! Core business logic module
//!
//! This module contains the record accumulation and emission components:
//! - `session` - Ordered record collection and in-progress map document
//! - `counter` - Persistent run counter for output filename generation
//! - `emitter` - Final render/save/report step

pub mod counter;
pub mod emitter;
pub mod session;

pub use counter::{RunCounter, DEFAULT_COUNTER_FILE};
pub use emitter::emit;
pub use session::Session;
