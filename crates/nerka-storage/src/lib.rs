//! Document store for the nerka page server.
//!
//! This crate provides a [`Storage`] trait for resolving logical paths to raw
//! document bytes. Lookups are plain `Result`s: a miss is a [`StorageError`]
//! with [`StorageErrorKind::NotFound`], never a panic.
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Storage`] trait with `read()`, `read_ext()`, and `stat()` methods
//! - [`FsStorage`] implementation backed by a root directory
//! - [`MockStorage`] for testing (behind `mock` feature flag)
//! - [`path`] helpers for joining and cleaning logical paths
//!
//! # Extension Fallback
//!
//! [`Storage::read_ext`] tries each of [`DOCUMENT_EXTENSIONS`] in order and
//! falls back to an exact match on the unmodified name:
//!
//! ```text
//! /guide  ->  /guide.md  ->  /guide.html  ->  /guide
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use nerka_storage::{FsStorage, Storage};
//!
//! let storage = FsStorage::new(PathBuf::from("docs"));
//! let doc = storage.read_ext("/guide")?;
//! println!("{} ({} bytes)", doc.path, doc.content.len());
//! ```

mod fs;
#[cfg(feature = "mock")]
mod mock;
pub mod path;
mod storage;

pub use fs::FsStorage;
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use storage::{
    DOCUMENT_EXTENSIONS, Document, EntryKind, Storage, StorageError, StorageErrorKind,
};
