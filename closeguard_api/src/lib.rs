//! Shared CloseGuard data models consumed by the core library and host adapters.

pub mod guard;
pub mod repository;

pub use guard::*;
pub use repository::*;
