//! Hosted store access.
//!
//! The store speaks the `PostgREST` dialect: every table lives under
//! `/rest/v1/<table>`, filters are query parameters such as `id=eq.<uuid>`,
//! and writes return the affected rows when asked with
//! `Prefer: return=representation`.

mod caller;
mod client;
mod config;
mod errors;

pub use caller::Caller;
pub use client::{Filter, StoreClient};
pub use config::{DEFAULT_STORE_URL, StoreConfig};
pub use errors::StoreError;
