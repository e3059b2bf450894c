//! Service layer: the per-game orchestrator and the table actors that host it.

pub mod game_flow;
pub mod table;
pub mod table_registry;
