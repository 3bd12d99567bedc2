//! Derived views over the day's blocks.
//!
//! This module provides:
//! - Free slot detection between consecutive blocks
//! - The merged day view of blocks and free slots in start order
//!
//! Everything here is recomputed from the stored blocks on demand;
//! nothing derived is ever persisted.

mod entry;
mod free;

pub use entry::{day_entries, DayEntry};
pub use free::{free_slots, FreeSlot};
