//! Game-database access layer: per-guild pool registry and query gateway.

pub mod gateway;
pub mod registry;

pub use gateway::QueryGateway;
pub use registry::PoolRegistry;
