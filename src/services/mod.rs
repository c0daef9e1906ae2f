pub mod checklist_renderer;
pub mod export_writer;
pub mod upload_manager;

pub use export_writer::{ExportWriter, EXPORT_FILE_NAME};
pub use upload_manager::{UploadManager, UploadSession};
