pub mod controller;
pub mod page_state;
pub mod trip_form;

pub use controller::ChecklistController;
pub use page_state::{PageNavigator, PageState};
pub use trip_form::{DateBounds, TripForm};
