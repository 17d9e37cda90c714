//! # Car Query Engine
//!
//! Listing logic behind `GET /api/cars`: validity filters, single-field sorting and the two
//! pagination styles, plus the expiring-insurance report.
//!
//! Everything here is a pure function over a `Vec<Car>` fetched from the store. Handlers
//! pass in the evaluation date, which keeps the engine deterministic under test.

pub mod engine;
pub mod request;
pub mod statistics;

pub use engine::{locale_cmp, run};
pub use request::*;
pub use statistics::{expiring_insurance, BrandCount};
