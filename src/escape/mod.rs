pub mod escape;
pub use self::escape::*;
