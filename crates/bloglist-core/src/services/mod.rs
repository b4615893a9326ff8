//! Services - use cases composed from the domain and the ports.

mod auth;
mod blog;
mod user;

pub use auth::{AuthService, Session};
pub use blog::BlogService;
pub use user::UserService;
