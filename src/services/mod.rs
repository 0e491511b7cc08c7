//! Application services orchestrating stores, hashing, and tokens.

mod destination;
mod user;

pub use destination::DestinationService;
pub use user::UserService;
