//! Commander panel core - list maintenance, highlight resolution, row building.

mod controller;
mod roster;
mod rows;

pub use controller::*;
pub use roster::*;
pub use rows::*;
