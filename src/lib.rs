//! # MyGarage
//!
//! > **Car records over HTTP, kept by an actor.**
//!
//! A small fleet service: each car carries its brand, model, year and the expiry dates of its
//! insurance, road tax and technical inspection. The listing endpoint filters on those dates,
//! sorts and paginates.
//!
//! ## Module Tour
//!
//! ### 1. The Records ([`model`])
//! Pure data: [`Car`](model::Car), the incoming [`CarPayload`](model::CarPayload) and the
//! demo fleet.
//!
//! ### 2. The Store ([`car_actor`], [`clients`])
//! A [`ResourceActor`](resource_framework::ResourceActor) owns every car. The entity
//! implementation validates each write; a failing update never touches the stored record.
//! [`CarClient`](clients::CarClient) wraps the generic client behind the
//! [`CarRepository`](clients::CarRepository) trait.
//!
//! ### 3. The Query Engine ([`query`])
//! Filter, sort and paginate a fetched list. Pure functions, with "today" passed in.
//!
//! ### 4. The Surface ([`http`], [`config`], [`cli`], [`lifecycle`])
//! axum routes, configuration, command-line overrides and the
//! [`GarageSystem`](lifecycle::GarageSystem) orchestrator.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run -- --seed
//! curl 'localhost:3001/api/cars?sortBy=year&order=desc&isValidInsurance=true'
//! ```

pub mod car_actor;
pub mod cli;
pub mod clients;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod query;
