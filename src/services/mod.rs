pub mod agent_service;
pub mod coercion;
pub mod export_service;
pub mod generation_service;
