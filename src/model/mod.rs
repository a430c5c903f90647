//! Domain models and parameter types.
//!
//! Repositories convert SeaORM entity models into these domain models at the
//! data-layer boundary so database-specific structures do not leak into the
//! service and command layers.

pub mod account_link;
pub mod settings;
