//! Core types for the CCoM storefront.
//!
//! This module provides the configuration document model and the admin
//! credential hash.

pub mod credential;
pub mod defaults;
pub mod document;

pub use credential::{CredentialError, PasswordHash};
pub use document::{
    AppConfig, ColorOption, DocumentError, Feature, ProductConfig, Specification,
    SpecificationIcon, StoreConfig, StoreContact, StoreLink,
};
