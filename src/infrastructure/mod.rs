pub mod memory_view;
pub mod terminal_view;
pub mod view;

pub use memory_view::{MemoryView, Preview};
pub use terminal_view::TerminalView;
pub use view::{CategoryGroup, ChecklistDocument, CheckboxItem, DisplayHandle, View};
