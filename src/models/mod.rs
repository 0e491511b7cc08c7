//! Data models for users and destinations.

pub mod destination;
pub mod user;

pub use destination::*;
pub use user::*;
