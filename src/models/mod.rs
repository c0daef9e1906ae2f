pub mod checklist;
pub mod loaders;
pub mod pending_file;
pub mod trip;

pub use checklist::{Categories, Category, ChecklistResponse};
pub use loaders::{load_trip_plan, TripPlan};
pub use pending_file::{mime_from_extension, CandidateFile, FileId, MediaKind, PendingFile};
pub use trip::{TripFields, TripRequest};
