//! [Systems](System) provide the logic for modifying the state of
//! [entities](crate::entities::Entity) and their associated
//! [components](crate::components::Component).
//!
//! A [System] must be manually added to a [World](crate::prelude::World)
//! for it to become active during the execution of the program.

mod system;
mod system_store;

pub use system::*;
pub(crate) use system_store::*;
