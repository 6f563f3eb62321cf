//! Device placement and setup composition engine.
//!
//! Users assemble a DJ, Producer or Musician rig by adding devices one at a
//! time. The engine classifies each device into a [`Role`], decides which
//! named [`Spot`] it should occupy, checks manual placements and reports how
//! complete the rig is. Every operation is a pure function over the values
//! passed in: nothing is cached, nothing is mutated, and no I/O happens
//! outside [`config`].

pub mod allocate;
pub mod brain;
pub mod compose;
pub mod config;
pub mod device;
pub mod error;
pub mod priority;
pub mod readiness;
pub mod role;
pub mod validate;

pub use allocate::allocate;
pub use brain::find_brain;
pub use compose::{compose, Composition};
pub use config::{RigConfig, SpotCatalog};
pub use device::{DeviceDescriptor, Position, Setup, SetupType, Spot};
pub use error::{Result, RigError};
pub use priority::spot_priorities;
pub use readiness::{evaluate, ReadinessReport, SetupStage};
pub use role::{classify, Role};
pub use validate::{can_place, check_placement, PlacementVerdict};
