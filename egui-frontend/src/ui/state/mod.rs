//! State structs owned by the dashboard app. Each one is plain data plus
//! transitions, with no egui types, so it can be tested on its own.

pub mod calendar_state;
pub mod modal_state;
pub mod ui_state;

pub use calendar_state::{CalendarState, DateObserver, PendingScroll};
pub use modal_state::ModalState;
pub use ui_state::UIState;
