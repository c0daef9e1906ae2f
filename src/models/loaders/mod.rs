pub mod toml_loader;

pub use toml_loader::{load_trip_plan, TripPlan};
