#![allow(unused_crate_dependencies)]

#[path = "context/common/mod.rs"]
mod common;

#[path = "context/properties.rs"]
mod properties;

#[path = "context/namespaces.rs"]
mod namespaces;
