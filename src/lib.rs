pub mod data_structures;
pub mod components;
pub mod entities;
pub mod systems;
mod error;
mod world;

pub use error::EcsError;

pub mod prelude {
	pub use crate::systems::*;
	pub use crate::components::*;
	pub use crate::world::World;
	pub use crate::error::EcsError;
	pub use crate::entities::{Entity, EntityAllocator};
}
