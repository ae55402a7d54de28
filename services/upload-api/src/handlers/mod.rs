use object_store::ObjectStore;
use record_store::UploadRecords;

pub mod images;
pub mod uploads;

/// Service handles shared by both endpoints, constructed once per process.
#[derive(Clone)]
pub struct AppState {
    pub store: ObjectStore,
    pub records: UploadRecords,
}
