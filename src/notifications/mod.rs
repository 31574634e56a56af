pub mod notifications;
pub use self::notifications::*;
