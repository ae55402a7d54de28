//! Thumbnail worker
//!
//! Consumes storage-change notifications for original uploads, produces two
//! JPEG resizes, writes them back under the thumbnail namespace and marks
//! the matching upload record done.

pub mod config;
pub mod handler;
pub mod paths;
pub mod processor;
