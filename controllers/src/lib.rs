//! Interaction controllers for the landing page sections.
//!
//! The carousel and the word rotator share [`RotationController`], the FAQ
//! accordion and the demo tabs share [`DisclosureController`]. Both only know
//! the number of items; rendering is left to the host.

pub mod disclosure;
pub mod error;
pub mod rotation;
pub mod timer;

pub use disclosure::DisclosureController;
pub use error::ControllerError;
pub use rotation::{RotationController, RotationPhase, RotationState};
pub use timer::{TimerService, VirtualHandle, VirtualTimers};
