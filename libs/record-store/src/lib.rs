//! Typed access to the DynamoDB tables behind the pipeline.
//!
//! Three tables, three narrow clients: upload records keyed by
//! (ownerId, itemId), user records keyed by userId, and the signup metrics
//! counter. Items are mapped to named structs with validated fields rather
//! than string-keyed maps.

mod metrics;
mod model;
mod uploads;
mod users;

pub use metrics::SignupMetrics;
pub use model::{UploadRecord, UploadStatus, UserRecord};
pub use uploads::UploadRecords;
pub use users::UserRecords;
