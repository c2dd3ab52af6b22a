pub mod message;
pub mod api;
pub mod event;
pub mod config;
pub mod error;
pub mod session;


pub use error::{ChatError, TransportError};
pub type Result<T> = std::result::Result<T, ChatError>;
pub type TransportResult<T> = std::result::Result<T, TransportError>;
