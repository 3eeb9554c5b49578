//! Shared FFI layer for symbridge bindings
//!
//! This crate provides what every binding crate builds on:
//! - The host object model (reference-counted strings, integers, externals)
//! - The Boxed Handle Protocol for native objects
//! - Marshalling between host objects and native types
//! - Binding descriptors and the `bindings!` generator
//! - The panic guard, configuration and logging setup

pub mod binding;
pub mod boundary;
pub mod config;
pub mod descriptor;
pub mod handle;
pub mod host;
pub mod json;
pub mod logging;
pub mod marshal;
pub mod string;

pub use config::BridgeOptions;
pub use descriptor::{BindingDescriptor, IntWidth, Receiver, ValueKind};
pub use handle::{NativeClass, box_native, unbox_native};
pub use host::{ObjArg, ObjRes};
pub use marshal::{FromHost, IntoHost};
