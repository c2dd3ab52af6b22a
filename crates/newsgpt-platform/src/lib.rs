//! Browser adapters for the NewsGPT client ports.

pub mod http;
pub mod storage;

#[cfg(test)]
mod tests;
