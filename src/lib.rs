//! Toast notifications, login handling and smoke checks for the alumni
//! network frontend.

pub mod config;
pub mod error;
pub mod login;
pub mod media;
pub mod notification;
pub mod smoke;
pub mod storage;


pub use error::AppError;
