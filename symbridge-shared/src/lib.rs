//! Types shared by the symbridge bridge, its C surface and its tooling.

pub mod errors;

pub use errors::{BridgeError, BridgeResult};
