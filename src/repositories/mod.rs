//! Repository layer for workspace file access.
//!
//! Repositories own the raw file-system operations and map I/O failures
//! into `AppError` with the offending path attached.

mod document;

pub use document::DocumentRepository;
