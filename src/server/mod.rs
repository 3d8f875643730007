//! HTTP server exposing the rental board
//!
//! - `GET /health`, `GET /healthz`
//! - `GET /rentals?name=&startDate=&endDate=&page=`
//! - `POST /rentals/refresh`

pub mod builder;
pub mod exposure;
pub mod host;

pub use builder::ServerBuilder;
pub use exposure::RestExposure;
pub use host::ServerHost;
