//! CCoM Core - Shared types library.
//!
//! This crate provides common types used across all CCoM components:
//! - `config-store` - Durable holder of the editable site configuration
//! - `storefront` - Public-facing marketing site and admin panel
//! - `cli` - Command-line tools for migrations and operator recovery
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - The editable configuration document and the admin credential
//!   hash, including the compiled-in default document

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
