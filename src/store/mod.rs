//! Flat-file stores: one JSON file per store, loaded into memory at startup
//! and rewritten wholesale (temp file then rename) on every mutation.

mod destinations;
mod users;

pub use destinations::DestinationStore;
pub use users::UserStore;
