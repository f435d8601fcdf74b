//! Contacts - a command-line contact book
//!
//! This library keeps a list of contacts in a single JSON file, validates
//! names, emails and phone numbers, and snapshots the file into a backup
//! directory after every successful save.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The contact record and its validation rules
//! - `storage`: The JSON-file-backed contact store
//! - `backup`: Timestamped backups and restore
//! - `audit`: Append-only journal of changes
//! - `export`: CSV and YAML export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use contacts::config::{ContactPaths, Settings};
//! use contacts::models::Contact;
//! use contacts::storage::open_store;
//!
//! let paths = ContactPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let (mut store, _) = open_store(&paths, &settings)?;
//! store.add(Contact::new("Ana Silva", vec!["912345678".into()]))?;
//! ```

pub mod audit;
pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod storage;

pub use error::{ContactError, ContactResult};
