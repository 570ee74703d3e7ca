//! Location data: the wire format, record validation, and the fetch client.

pub mod fetch;
pub mod locations;

pub use fetch::LocationClient;
pub use locations::{parse_locations, DatasetStats, LocationRecord, RawLocation};
