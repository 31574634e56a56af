pub mod telemetry;
pub use self::telemetry::*;
