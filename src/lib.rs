//! welcomegen: generate welcome dialog release-note data from AppStream
//! metadata.
//!
//! The pipeline is linear: parse the metadata document, select the first
//! `<release>` matching a version, extract and escape its introduction and
//! highlight items, then render C declarations or definitions as text.

pub mod appdata;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod demo;
pub mod emit;
pub mod error;
pub mod exit_codes;
pub mod logging;
