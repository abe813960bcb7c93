//! Prediction history persistence

use crate::model::forecast::{RiskLevel, Scenario};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// A completed prediction, as listed in the history overlay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionHistoryEntry {
    pub timestamp: DateTime<Local>,
    pub horizon_months: u32,
    pub scenario: Scenario,
    pub user_level: Option<f64>,
    pub risk: RiskLevel,
    pub drought_probable: bool,
    pub duration_secs: f64,
}

impl PredictionHistoryEntry {
    pub fn formatted_time(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M").to_string()
    }

    pub fn formatted_duration(&self) -> String {
        format!("{:.1}s", self.duration_secs)
    }
}

/// Wrapper for persisting prediction history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionHistory {
    pub entries: Vec<PredictionHistoryEntry>,
}

impl PredictionHistory {
    fn history_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".sequia-tui"))
    }

    fn history_path() -> Option<PathBuf> {
        Self::history_dir().map(|dir| dir.join("history.json"))
    }

    /// Load saved entries; any failure yields an empty history.
    pub fn load() -> Vec<PredictionHistoryEntry> {
        let history_path = match Self::history_path() {
            Some(p) => p,
            None => return Vec::new(),
        };

        if !history_path.exists() {
            return Vec::new();
        }

        let contents = match fs::read_to_string(&history_path) {
            Ok(c) => c,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str::<PredictionHistory>(&contents) {
            Ok(history) => history.entries,
            Err(_) => Vec::new(),
        }
    }

    pub fn save(entries: &[PredictionHistoryEntry]) -> anyhow::Result<()> {
        let history_dir = Self::history_dir()
            .ok_or_else(|| anyhow::anyhow!("could not determine home directory"))?;

        if !history_dir.exists() {
            fs::create_dir_all(&history_dir)?;
        }

        let history_path = Self::history_path()
            .ok_or_else(|| anyhow::anyhow!("could not determine history path"))?;

        let history = PredictionHistory {
            entries: entries.to_vec(),
        };

        let json = serde_json::to_string_pretty(&history)?;
        fs::write(&history_path, json)?;

        Ok(())
    }
}
