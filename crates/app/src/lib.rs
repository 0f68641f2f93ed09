//! Shared application domain and store access for the padel match API.

pub mod context;
pub mod domain;
pub mod store;
pub mod uuids;

#[cfg(test)]
mod test;

pub use uuids::{is_uuid, parse_uuid};
