//! Model layer - domain types and UI state
//!
//! - `forecast` - wire types for the prediction backend
//! - `horizon` - target-month to forecast-horizon derivation
//! - `health` - backend status for the pill
//! - `history` - persisted past predictions
//! - `modal` - overlay stack
//! - `ui` - tab state

pub mod forecast;
pub mod health;
pub mod history;
pub mod horizon;
pub mod modal;
pub mod ui;

pub use forecast::{
    MonthlyForecast, PredictionRequest, PredictionResponse, RiskLevel, Scenario, Thresholds,
};
pub use health::ApiStatus;
pub use history::{PredictionHistory, PredictionHistoryEntry};
pub use modal::{Modal, ModalStack};
pub use ui::Tab;
