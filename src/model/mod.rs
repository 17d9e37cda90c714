//! Pure data structures: the stored [`Car`] and the DTOs that create and modify it.

pub mod car;
pub mod seed;

pub use car::*;
