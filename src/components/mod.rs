//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering
//! logic. Components communicate through Actions rather than direct state
//! mutation.

pub mod about;
pub mod dashboard;
pub mod form;
pub mod help_dialog;
pub mod history_dialog;
pub mod layout;
pub mod quit_dialog;
pub mod results;
pub mod status;

pub use about::AboutComponent;
pub use dashboard::DashboardComponent;
pub use form::{FormComponent, FormField};
pub use help_dialog::HelpDialog;
pub use history_dialog::HistoryDialog;
pub use layout::{calculate_main_layout, centered_popup, forecast_split, MainLayout};
pub use quit_dialog::QuitDialog;
pub use results::ResultsComponent;
pub use status::draw_status_pill;
