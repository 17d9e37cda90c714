//! Type-safe wrappers around [`ResourceClient`](resource_framework::ResourceClient).

pub mod car_client;
pub mod repository;

pub use car_client::*;
pub use repository::*;
