pub mod config;
pub mod persistence;
pub mod processors;
pub mod routing;
pub mod workers;
