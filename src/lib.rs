#![allow(clippy::enum_variant_names)]

pub mod application;
pub mod cli;
pub mod config;
pub mod counter;
pub mod ext;
pub mod filesystem;
pub mod footer;
pub mod manifest;
