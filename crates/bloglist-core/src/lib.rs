//! # Bloglist Core
//!
//! The domain layer of the bloglist backend.
//! This crate contains the post/user model, the statistics aggregator, the
//! ownership rules and the services built on top of the ports. It has no
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
