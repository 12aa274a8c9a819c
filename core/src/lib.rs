//! Hidden-information grid-maze engine.
//!
//! A fixed 20×20 layout of open path, walls, and pits that an external runner
//! explores one probe and one step at a time. The engine owns two grids: the
//! immutable ground truth and the runner's partial view of it, which fills in
//! only as cells are probed or targeted by moves.

#![no_std]

extern crate alloc;

pub use engine::*;
pub use error::*;
pub use layout::*;
pub use tile::*;
pub use types::*;

mod engine;
mod error;
mod layout;
mod tile;
mod types;
