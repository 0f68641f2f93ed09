//! Participants

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::ParticipantsServiceError;
pub use service::*;
