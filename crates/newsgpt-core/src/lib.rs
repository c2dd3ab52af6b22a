//! NewsGPT client core.
//!
//! Owns the conversation state machine and the backend-facing session
//! client. Everything platform-specific is reached through the traits in
//! [`ports`].

pub mod ports;
pub mod event_bus;
pub mod session_client;
pub mod controller;
