//! HTTP surface. `direct` drives the local controller, `proxy` forwards to a
//! remote device's own API.

pub mod direct;
pub mod proxy;
mod water_request;

pub use water_request::{duration_json, parse_duration};
