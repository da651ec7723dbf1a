//! Gameplay entities
//!
//! The concrete emitter variants plus the strip hazards. Entities that emit
//! or listen live behind `Rc<RefCell<_>>` so event handlers can re-enter
//! them; `spawn` constructors hand back the one long-lived handle and do the
//! registry wiring themselves.

mod door;
mod hazards;
mod lives;
mod pickup;
mod player;

pub use door::ExitDoor;
pub use hazards::{ContactOutcome, CrusherHazard, PatrolHazard};
pub use lives::LifeTracker;
pub use pickup::{Pickup, PickupKind};
pub use player::PlayerActor;
