//! Padel Domain Concerns

pub mod matches;
pub mod participants;
