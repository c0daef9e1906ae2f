pub mod checklist_client;

pub use checklist_client::{ChecklistApi, ChecklistClient, GENERATE_CHECKLIST_PATH};
