//! Record types, typed ids, and validation rules.
//!
//! This crate contains **pure domain** code (no storage or HTTP concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod movie;
pub mod user;
pub mod validation;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{MovieId, UserId};
pub use movie::{Movie, MovieFilter, MovieInput, NewMovie};
pub use user::{NewUser, User, UserFilter, UserInput};
pub use validation::{FieldError, Validate, ValidationErrors};
