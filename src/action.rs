//! Action enum - all application actions
//!
//! Components convert key events into Actions; the App processes them to
//! update state.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for polling background requests
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to next tab
    NextTab,
    /// Move to previous tab
    PrevTab,
    /// Focus the next form field
    FocusNext,
    /// Focus the previous form field
    FocusPrev,
    /// Next entry in a list overlay
    NextItem,
    /// Previous entry in a list overlay
    PrevItem,

    // ─────────────────────────────────────────────────────────────────────────
    // Form Editing
    // ─────────────────────────────────────────────────────────────────────────
    /// Type a character into the focused field
    Input(char),
    /// Delete the last character of the focused field
    Backspace,
    /// Cycle the focused choice field forward
    NextOption,
    /// Cycle the focused choice field backward
    PrevOption,
    /// Reset the form and clear the current result
    ClearForm,

    // ─────────────────────────────────────────────────────────────────────────
    // Backend
    // ─────────────────────────────────────────────────────────────────────────
    /// Validate the form and submit a prediction request
    Submit,
    /// Probe the backend health endpoint now
    RefreshHealth,

    // ─────────────────────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────────────────────
    /// Scroll the results table up one line
    ScrollUp,
    /// Scroll the results table down one line
    ScrollDown,
    /// Scroll up one page
    PageUp,
    /// Scroll down one page
    PageDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open keyboard shortcut reference
    OpenHelp,
    /// Open prediction history overlay
    OpenHistory,
    /// Close the current modal
    CloseModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Export
    // ─────────────────────────────────────────────────────────────────────────
    /// Write the current forecast to a text report
    ExportReport,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::NextTab => write!(f, "NextTab"),
            Action::PrevTab => write!(f, "PrevTab"),
            Action::FocusNext => write!(f, "FocusNext"),
            Action::FocusPrev => write!(f, "FocusPrev"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::Input(c) => write!(f, "Input('{}')", c),
            Action::Backspace => write!(f, "Backspace"),
            Action::NextOption => write!(f, "NextOption"),
            Action::PrevOption => write!(f, "PrevOption"),
            Action::ClearForm => write!(f, "ClearForm"),
            Action::Submit => write!(f, "Submit"),
            Action::RefreshHealth => write!(f, "RefreshHealth"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::PageUp => write!(f, "PageUp"),
            Action::PageDown => write!(f, "PageDown"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::OpenHistory => write!(f, "OpenHistory"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ExportReport => write!(f, "ExportReport"),
        }
    }
}
