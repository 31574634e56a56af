pub mod formatter;
pub use self::formatter::*;
