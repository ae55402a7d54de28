//! Upload API
//!
//! Two authenticated endpoints over the upload pipeline: issuing a
//! short-lived presigned PUT URL (pre-creating the upload record), and
//! listing the caller's uploads with presigned read URLs for finished
//! thumbnails.

pub mod auth;
pub mod config;
pub mod handlers;
pub mod models;
pub mod response;
