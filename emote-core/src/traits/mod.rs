//! Collaborator traits
//!
//! These traits define the interface between the animation logic and the
//! panel driver / timer service it runs on.

pub mod panel;
pub mod timer;

pub use panel::{BitmapPanel, PanelError};
pub use timer::{PeriodicTimer, TimerError, TimerFactory};
