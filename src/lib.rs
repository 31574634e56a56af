pub mod configuration;
pub mod escape;
pub mod formatter;
pub mod notifications;
pub mod routes;
pub mod telemetry;
pub mod traits;
