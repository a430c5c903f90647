//! Business logic between the command layer and the repositories.

pub mod throttle;
pub mod verify;
