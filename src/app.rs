//! Root application component
//!
//! The App struct implements the Component trait, acting as the root that
//! routes key events (top modal first, then global shortcuts, then the
//! active tab) and applies background API results to the UI. It coordinates
//! between components but holds no rendering logic of its own beyond the
//! frame chrome.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_main_layout, draw_status_pill, forecast_split, AboutComponent, DashboardComponent,
    FormComponent, HelpDialog, HistoryDialog, QuitDialog, ResultsComponent,
};
use crate::config::Config;
use crate::model::{
    ApiStatus, Modal, ModalStack, PredictionHistory, PredictionHistoryEntry, PredictionRequest,
    PredictionResponse, Tab,
};
use crate::services::{report, ApiClient, ApiEvent, RequestKind, RequestRunner};
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use std::time::{Duration, Instant};

/// Main application state - coordinates between components
pub struct App {
    pub config: Config,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Current active tab
    pub active_tab: Tab,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Latest health probe result
    pub api_status: ApiStatus,

    /// When the last health probe was started
    last_health_probe: Option<Instant>,

    /// Background runner for health probes
    health_runner: RequestRunner,

    /// Background runner for prediction requests
    predict_runner: RequestRunner,

    /// The request currently in flight (or last completed)
    last_request: Option<PredictionRequest>,

    /// The last successful response, kept for export and history
    last_response: Option<PredictionResponse>,

    /// Error banner for failed submissions
    pub error: Option<String>,

    /// Transient status message (export confirmation, etc.)
    pub status_message: Option<String>,

    /// Past predictions, most recent first
    pub history: Vec<PredictionHistoryEntry>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub form: FormComponent,
    pub results: ResultsComponent,
    pub dashboard: DashboardComponent,
    pub about: AboutComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
    pub history_dialog: HistoryDialog,
}

impl App {
    pub fn new(config: Config) -> App {
        let about = AboutComponent::new(&config.backend_url);
        App {
            config,
            should_quit: false,
            active_tab: Tab::Forecast,
            modals: ModalStack::new(),
            api_status: ApiStatus::Unknown,
            last_health_probe: None,
            health_runner: RequestRunner::new(),
            predict_runner: RequestRunner::new(),
            last_request: None,
            last_response: None,
            error: None,
            status_message: None,
            // Tests must not read or clobber a real user's history file.
            history: if cfg!(test) {
                Vec::new()
            } else {
                PredictionHistory::load()
            },
            form: FormComponent::new(),
            results: ResultsComponent::new(),
            dashboard: DashboardComponent::new(),
            about,
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
            history_dialog: HistoryDialog::default(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Backend interaction
    // ─────────────────────────────────────────────────────────────────────────

    fn spawn_health_probe(&mut self) {
        if self.health_runner.is_busy() {
            return;
        }
        let backend_url = self.config.backend_url.clone();
        self.last_health_probe = Some(Instant::now());
        self.health_runner.spawn(RequestKind::Health, move || {
            let client = ApiClient::new(&backend_url);
            ApiEvent::Health(client.check_health())
        });
    }

    fn health_probe_due(&self) -> bool {
        match self.last_health_probe {
            None => true,
            Some(at) => at.elapsed() >= Duration::from_secs(self.config.health_interval_secs),
        }
    }

    fn submit(&mut self) {
        // One request at a time; the disabled submit control makes this
        // unreachable from the UI, but key repeat can race the flag.
        if self.predict_runner.is_busy() {
            return;
        }

        let request = match self.form.build_request() {
            Ok(request) => request,
            Err(e) => {
                self.form.error = Some(e.to_string());
                return;
            }
        };

        self.form.error = None;
        self.error = None;
        self.status_message = None;
        self.last_request = Some(request.clone());
        self.form.set_submitting(true);

        let backend_url = self.config.backend_url.clone();
        self.predict_runner.spawn(RequestKind::Prediction, move || {
            let client = ApiClient::new(&backend_url);
            ApiEvent::Prediction(client.predict(&request))
        });
    }

    fn apply_api_event(&mut self, event: ApiEvent, duration_secs: f64) {
        match event {
            ApiEvent::Health(status) => {
                self.api_status = status;
            }
            ApiEvent::Prediction(Ok(response)) => {
                self.error = None;
                self.results.set_response(response.clone());
                self.dashboard.set_response(&response);
                self.record_history(&response, duration_secs);
                self.last_response = Some(response);
            }
            ApiEvent::Prediction(Err(e)) => {
                self.error = Some(e.to_string());
            }
        }
    }

    fn record_history(&mut self, response: &PredictionResponse, duration_secs: f64) {
        let Some(ref request) = self.last_request else {
            return;
        };

        let entry = PredictionHistoryEntry {
            timestamp: Local::now(),
            horizon_months: request.horizonte_meses,
            scenario: request.escenario,
            user_level: request.nivel_actual_usuario,
            risk: response.riesgo_general,
            drought_probable: response.sequia_probable,
            duration_secs,
        };

        self.history.insert(0, entry);
        if self.history.len() > self.config.history_limit {
            self.history.truncate(self.config.history_limit);
        }
        if !cfg!(test) {
            let _ = PredictionHistory::save(&self.history);
        }
    }

    fn export_report(&mut self) {
        let (Some(request), Some(response)) = (&self.last_request, &self.last_response) else {
            self.status_message = Some("nothing to export yet".to_string());
            return;
        };

        match report::export_report(request, response) {
            Ok(path) => {
                self.status_message = Some(format!("report written to {}", path.display()));
            }
            Err(e) => {
                self.error = Some(format!("could not write the report: {}", e));
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Key routing
    // ─────────────────────────────────────────────────────────────────────────

    fn handle_modal_key_event(&mut self, modal: Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
            Modal::History => self.history_dialog.handle_key_event(key),
        }
    }

    fn handle_global_key_event(&mut self, key: KeyEvent) -> Option<Action> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::ForceQuit);
        }

        match key.code {
            KeyCode::Tab => Some(Action::NextTab),
            KeyCode::BackTab => Some(Action::PrevTab),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('r') => Some(Action::RefreshHealth),
            KeyCode::Char('y') => Some(Action::ExportReport),
            KeyCode::Char('h') => Some(Action::OpenHistory),
            KeyCode::Char('c') => Some(Action::ClearForm),
            _ => None,
        }
    }

    fn handle_scroll_key_event(key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('j') => Some(Action::ScrollDown),
            KeyCode::Char('k') => Some(Action::ScrollUp),
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::PageDown)
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::PageUp)
            }
            _ => None,
        }
    }

    fn move_history_selection(&mut self, delta: isize) {
        if self.history.is_empty() {
            return;
        }
        let max = self.history.len() - 1;
        let current = self.history_dialog.selected_index.min(max) as isize;
        self.history_dialog.selected_index = (current + delta).clamp(0, max as isize) as usize;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Drawing
    // ─────────────────────────────────────────────────────────────────────────

    fn draw_tabs(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = Tab::all()
            .iter()
            .map(|tab| Line::from(format!(" {} ", tab.name())))
            .collect();

        let tabs = Tabs::new(titles)
            .select(self.active_tab.index())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" sequia-tui "),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(tabs, area);
    }

    fn draw_banner(&self, frame: &mut Frame, area: Rect) {
        let line = if let Some(ref error) = self.error {
            Line::from(Span::styled(
                format!(" ✗ {}", error),
                Style::default().fg(Color::Red),
            ))
        } else if let Some(ref message) = self.status_message {
            Line::from(Span::styled(
                format!(" {}", message),
                Style::default().fg(Color::Green),
            ))
        } else {
            Line::from("")
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    fn draw_help_bar(&self, frame: &mut Frame, area: Rect) {
        let hint = |keys: &str, label: &str| -> Vec<Span<'static>> {
            vec![
                Span::styled(
                    format!(" {} ", keys),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("{}  ", label)),
            ]
        };

        let mut spans = Vec::new();
        spans.extend(hint("Tab", "Switch tab"));
        if self.active_tab == Tab::Forecast {
            spans.extend(hint("↑↓", "Field"));
            spans.extend(hint("Enter", "Submit"));
            spans.extend(hint("j/k", "Scroll"));
        }
        spans.extend(hint("r", "Health"));
        spans.extend(hint("y", "Export"));
        spans.extend(hint("h", "History"));
        spans.extend(hint("?", "Help"));
        spans.extend(hint("q", "Quit"));

        let help = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        // First health probe kicks off immediately.
        self.spawn_health_probe();
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if let Some(modal) = self.modals.top() {
            return self.handle_modal_key_event(modal, key);
        }

        if let Some(action) = self.handle_global_key_event(key) {
            return Ok(Some(action));
        }

        match self.active_tab {
            Tab::Forecast => {
                if let Some(action) = self.form.handle_key_event(key)? {
                    return Ok(Some(action));
                }
                Ok(Self::handle_scroll_key_event(key))
            }
            Tab::Dashboard | Tab::About => Ok(Self::handle_scroll_key_event(key)),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Tick => {
                if let Some(event) = self.health_runner.poll() {
                    self.apply_api_event(event, 0.0);
                }
                let duration = self.predict_runner.elapsed_secs().unwrap_or(0.0);
                if let Some(event) = self.predict_runner.poll() {
                    self.apply_api_event(event, duration);
                }
                // The runner is the source of truth for the disabled state.
                self.form.set_submitting(self.predict_runner.is_busy());

                if self.health_probe_due() {
                    self.spawn_health_probe();
                }
            }
            Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            Action::NextTab => {
                self.active_tab = self.active_tab.next();
            }
            Action::PrevTab => {
                self.active_tab = self.active_tab.prev();
            }

            Action::Submit => {
                self.submit();
            }
            Action::RefreshHealth => {
                self.spawn_health_probe();
            }
            Action::ExportReport => {
                self.export_report();
            }

            Action::ClearForm => {
                self.form.update(Action::ClearForm)?;
                self.results.clear();
                self.dashboard.clear();
                self.last_response = None;
                self.error = None;
                self.status_message = None;
            }

            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::OpenHistory => {
                self.history_dialog.selected_index = 0;
                self.modals.push(Modal::History);
            }
            Action::CloseModal => {
                self.modals.pop();
            }

            Action::NextItem => {
                if self.modals.top() == Some(Modal::History) {
                    self.move_history_selection(1);
                }
            }
            Action::PrevItem => {
                if self.modals.top() == Some(Modal::History) {
                    self.move_history_selection(-1);
                }
            }

            Action::ScrollUp | Action::ScrollDown | Action::PageUp | Action::PageDown => {
                if self.modals.top() == Some(Modal::Help) {
                    self.help_dialog.update(action)?;
                } else {
                    self.results.update(action)?;
                }
            }

            Action::FocusNext
            | Action::FocusPrev
            | Action::Input(_)
            | Action::Backspace
            | Action::NextOption
            | Action::PrevOption => {
                self.form.update(action)?;
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let has_banner = self.error.is_some() || self.status_message.is_some();
        let layout = calculate_main_layout(area, has_banner);

        self.draw_tabs(frame, layout.tabs);
        draw_status_pill(frame, layout.status, self.api_status);
        if let Some(banner) = layout.banner {
            self.draw_banner(frame, banner);
        }

        match self.active_tab {
            Tab::Forecast => {
                let (form_area, results_area) = forecast_split(layout.content);
                self.form.draw(frame, form_area)?;
                self.results.draw(frame, results_area)?;
            }
            Tab::Dashboard => {
                self.dashboard.draw(frame, layout.content)?;
            }
            Tab::About => {
                self.about.draw(frame, layout.content)?;
            }
        }

        self.draw_help_bar(frame, layout.help);

        // Modals render bottom to top; only the top one gets input.
        let modals: Vec<Modal> = self.modals.iter().collect();
        for modal in modals {
            match modal {
                Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
                Modal::Help => self.help_dialog.draw(frame, area)?,
                Modal::History => {
                    let entries = self.history.clone();
                    self.history_dialog.draw_with_entries(frame, area, &entries);
                }
            }
        }

        Ok(())
    }
}
