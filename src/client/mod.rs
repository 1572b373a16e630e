//! InfluxDB v2 API client

pub mod api;
pub mod influx;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use api::{InfluxApi, OrgApi};
pub use influx::InfluxClient;
#[cfg(test)]
pub use mock::{CapturedRequest, MockInfluxClient};
