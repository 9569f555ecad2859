//! Bevy ECS Systems - Object lifecycle and commander panel logic

mod lifecycle;
mod panel;

pub use lifecycle::*;
pub use panel::*;
