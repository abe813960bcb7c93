//! Prediction form component
//!
//! Collects the target month, climate scenario, and optional current
//! reservoir level, validates them, and builds the request payload. The
//! submit control is disabled while a request is in flight.

use crate::action::Action;
use crate::component::Component;
use crate::model::forecast::{PredictionRequest, Scenario};
use crate::model::horizon;
use anyhow::{anyhow, bail, Result};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Focusable form fields, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    TargetMonth,
    Scenario,
    CurrentLevel,
    Submit,
}

impl FormField {
    fn next(&self) -> FormField {
        match self {
            FormField::TargetMonth => FormField::Scenario,
            FormField::Scenario => FormField::CurrentLevel,
            FormField::CurrentLevel => FormField::Submit,
            FormField::Submit => FormField::TargetMonth,
        }
    }

    fn prev(&self) -> FormField {
        match self {
            FormField::TargetMonth => FormField::Submit,
            FormField::Scenario => FormField::TargetMonth,
            FormField::CurrentLevel => FormField::Scenario,
            FormField::Submit => FormField::CurrentLevel,
        }
    }
}

/// Prediction form state
pub struct FormComponent {
    /// Target month input, `YYYY-MM`
    pub target_month: String,
    /// Selected climate scenario; starts unselected
    pub scenario: Option<Scenario>,
    /// Optional current reservoir level input
    pub current_level: String,
    /// Currently focused field
    pub focus: FormField,
    /// Inline validation error
    pub error: Option<String>,
    /// Whether a request is in flight (disables the submit control)
    submitting: bool,
}

impl Default for FormComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl FormComponent {
    pub fn new() -> Self {
        Self {
            target_month: String::new(),
            scenario: None,
            current_level: String::new(),
            focus: FormField::TargetMonth,
            error: None,
            submitting: false,
        }
    }

    pub fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validate the form and build the request payload. No side effects;
    /// the first invalid field wins.
    pub fn build_request(&self) -> Result<PredictionRequest> {
        let escenario = self
            .scenario
            .ok_or_else(|| anyhow!("select a climate scenario before submitting"))?;

        let horizonte_meses = horizon::months_ahead(&self.target_month)?;

        let nivel_actual_usuario = match self.current_level.trim() {
            "" => None,
            text => {
                let level: f64 = text
                    .parse()
                    .map_err(|_| anyhow!("'{}' is not a valid reservoir level", text))?;
                if level < 0.0 {
                    bail!("the reservoir level cannot be negative");
                }
                Some(level)
            }
        };

        Ok(PredictionRequest {
            horizonte_meses,
            escenario,
            nivel_actual_usuario,
        })
    }

    /// Reset all inputs and the inline error.
    pub fn clear(&mut self) {
        self.target_month.clear();
        self.scenario = None;
        self.current_level.clear();
        self.focus = FormField::TargetMonth;
        self.error = None;
    }

    fn focused_text_field(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::TargetMonth => Some(&mut self.target_month),
            FormField::CurrentLevel => Some(&mut self.current_level),
            _ => None,
        }
    }

    fn cycle_scenario(&mut self, forward: bool) {
        self.scenario = Some(match (self.scenario, forward) {
            (None, true) => Scenario::Normal,
            (None, false) => Scenario::Humedo,
            (Some(s), true) => s.next(),
            (Some(s), false) => s.prev(),
        });
        self.error = None;
    }

    fn field_line(&self, field: FormField, label: &str, value: String) -> Line<'static> {
        let focused = self.focus == field;
        let marker = if focused { "▸ " } else { "  " };
        let label_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        Line::from(vec![
            Span::styled(marker.to_string(), label_style),
            Span::styled(format!("{:<16}", label), label_style),
            Span::styled(value, Style::default().fg(Color::White)),
        ])
    }
}

impl Component for FormComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Down => Some(Action::FocusNext),
            KeyCode::Up => Some(Action::FocusPrev),
            KeyCode::Enter => {
                if self.focus == FormField::Submit {
                    Some(Action::Submit)
                } else {
                    Some(Action::FocusNext)
                }
            }
            KeyCode::Left if self.focus == FormField::Scenario => Some(Action::PrevOption),
            KeyCode::Right if self.focus == FormField::Scenario => Some(Action::NextOption),
            KeyCode::Char(' ') if self.focus == FormField::Scenario => Some(Action::NextOption),
            KeyCode::Backspace => Some(Action::Backspace),
            // Text fields only hold dates and numbers; everything else stays
            // free for global shortcuts.
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' || c == '.' => {
                Some(Action::Input(c))
            }
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::FocusNext => {
                self.focus = self.focus.next();
            }
            Action::FocusPrev => {
                self.focus = self.focus.prev();
            }
            Action::Input(c) => {
                if let Some(field) = self.focused_text_field() {
                    field.push(c);
                    self.error = None;
                }
            }
            Action::Backspace => {
                if let Some(field) = self.focused_text_field() {
                    field.pop();
                    self.error = None;
                }
            }
            Action::NextOption => self.cycle_scenario(true),
            Action::PrevOption => self.cycle_scenario(false),
            Action::ClearForm => self.clear(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let scenario_value = match self.scenario {
            Some(s) => format!("◂ {} ▸", s.label()),
            None => "◂ — select — ▸".to_string(),
        };
        let level_value = if self.current_level.is_empty() {
            "(optional)".to_string()
        } else {
            format!("{} hm³", self.current_level)
        };

        let mut lines = vec![
            Line::from(""),
            self.field_line(
                FormField::TargetMonth,
                "Target month",
                if self.target_month.is_empty() {
                    "YYYY-MM".to_string()
                } else {
                    self.target_month.clone()
                },
            ),
            Line::from(Span::styled(
                format!("    data ends {}", horizon::last_observation_label()),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            self.field_line(FormField::Scenario, "Scenario", scenario_value),
        ];

        if let Some(scenario) = self.scenario {
            lines.push(Line::from(Span::styled(
                format!("    {}", scenario.description()),
                Style::default().fg(Color::DarkGray),
            )));
        }

        lines.push(Line::from(""));
        lines.push(self.field_line(FormField::CurrentLevel, "Current level", level_value));
        lines.push(Line::from(""));

        let submit_label = if self.submitting {
            " Predicting… "
        } else {
            " Predict "
        };
        let submit_style = if self.submitting {
            Style::default().fg(Color::DarkGray)
        } else if self.focus == FormField::Submit {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("[{}]", submit_label), submit_style),
        ]));

        if let Some(ref error) = self.error {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("  ✗ {}", error),
                Style::default().fg(Color::Red),
            )));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Prediction ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        frame.render_widget(paragraph, area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> FormComponent {
        let mut form = FormComponent::new();
        form.target_month = "2025-06".to_string();
        form.scenario = Some(Scenario::Seco);
        form.current_level = "810.5".to_string();
        form
    }

    #[test]
    fn test_valid_form_builds_request() {
        let request = filled_form().build_request().unwrap();
        assert_eq!(request.horizonte_meses, 6);
        assert_eq!(request.escenario, Scenario::Seco);
        assert_eq!(request.nivel_actual_usuario, Some(810.5));
    }

    #[test]
    fn test_missing_scenario_is_a_specific_error() {
        let mut form = filled_form();
        form.scenario = None;

        let err = form.build_request().unwrap_err();
        assert!(err.to_string().contains("climate scenario"));
    }

    #[test]
    fn test_empty_level_is_omitted() {
        let mut form = filled_form();
        form.current_level = "  ".to_string();

        let request = form.build_request().unwrap();
        assert_eq!(request.nivel_actual_usuario, None);
    }

    #[test]
    fn test_bad_level_is_rejected() {
        let mut form = filled_form();
        form.current_level = "8one0".to_string();
        assert!(form.build_request().is_err());

        form.current_level = "-5".to_string();
        let err = form.build_request().unwrap_err();
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn test_past_target_month_is_rejected() {
        let mut form = filled_form();
        form.target_month = "2024-11".to_string();
        assert!(form.build_request().is_err());
    }

    #[test]
    fn test_focus_cycles_through_all_fields() {
        let mut form = FormComponent::new();
        let start = form.focus;
        for _ in 0..4 {
            form.update(Action::FocusNext).unwrap();
        }
        assert_eq!(form.focus, start);

        form.update(Action::FocusPrev).unwrap();
        assert_eq!(form.focus, FormField::Submit);
    }

    #[test]
    fn test_scenario_cycling_from_unselected() {
        let mut form = FormComponent::new();
        form.update(Action::NextOption).unwrap();
        assert_eq!(form.scenario, Some(Scenario::Normal));
        form.update(Action::PrevOption).unwrap();
        assert_eq!(form.scenario, Some(Scenario::Humedo));
    }

    #[test]
    fn test_text_input_reaches_focused_field() {
        let mut form = FormComponent::new();
        for c in "2025-03".chars() {
            form.update(Action::Input(c)).unwrap();
        }
        assert_eq!(form.target_month, "2025-03");

        form.update(Action::Backspace).unwrap();
        assert_eq!(form.target_month, "2025-0");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut form = filled_form();
        form.error = Some("old".to_string());
        form.clear();

        assert!(form.target_month.is_empty());
        assert!(form.scenario.is_none());
        assert!(form.current_level.is_empty());
        assert!(form.error.is_none());
        assert_eq!(form.focus, FormField::TargetMonth);
    }

    #[test]
    fn test_enter_on_submit_emits_submit() {
        use crossterm::event::{KeyEvent, KeyModifiers};

        let mut form = FormComponent::new();
        form.focus = FormField::Submit;
        let action = form
            .handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::Submit));

        form.focus = FormField::TargetMonth;
        let action = form
            .handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::FocusNext));
    }
}
