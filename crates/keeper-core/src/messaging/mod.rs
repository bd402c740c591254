//! Messenger-agnostic message model and the transport port the relay drives.

pub mod port;
pub mod types;
