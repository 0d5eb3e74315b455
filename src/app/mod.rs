pub mod app;
pub mod event;
pub mod mode;
pub mod state;

pub use app::App;
pub use event::AppEvent;
pub use mode::AppMode;
pub use state::HoverState;
