//! Registration API
//!
//! Creates a user record and kicks off the asynchronous welcome workflow by
//! publishing a `UserRegistered` event. Consumers of that event (welcome
//! mailer, signup metrics) run independently.

pub mod config;
pub mod register;
