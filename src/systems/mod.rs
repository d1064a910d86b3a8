//! Systems - everything that mutates the grid during a tick

pub mod behaviors;
pub mod particles;
