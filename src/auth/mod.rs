//! Authentication: password hashing, signed tokens, admission control.

mod handlers;
mod password;
pub mod policy;
mod token;

pub use handlers::{login, profile, register};
pub use password::PasswordService;
pub use token::{Claims, TokenService, TokenSubject};
