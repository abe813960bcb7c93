//! Plain-text forecast reports
//!
//! The `y` key renders the current forecast to a text file under the app's
//! config directory so it can be pasted into a message or attached to a
//! ticket.

use crate::model::forecast::{PredictionRequest, PredictionResponse};
use anyhow::{anyhow, Result};
use chrono::Local;
use std::env;
use std::fs;
use std::path::PathBuf;

fn reports_dir() -> Option<PathBuf> {
    let home = env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".sequia-tui").join("reports"))
}

/// Render the forecast as plain text.
pub fn render_report(request: &PredictionRequest, response: &PredictionResponse) -> String {
    let mut out = String::new();

    out.push_str("Drought risk forecast\n");
    out.push_str(&format!(
        "Generated: {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!(
        "Horizon: {} months  Scenario: {}\n",
        request.horizonte_meses,
        request.escenario.label()
    ));
    if let Some(level) = request.nivel_actual_usuario {
        out.push_str(&format!("Reported current level: {:.1} hm³\n", level));
    }
    out.push_str(&format!(
        "Overall risk: {}  Drought probable: {}\n",
        response.riesgo_general.label(),
        if response.sequia_probable { "yes" } else { "no" }
    ));
    if let Some(thresholds) = response.umbrales {
        out.push_str(&format!(
            "Thresholds: p10 = {:.1} hm³, p25 = {:.1} hm³\n",
            thresholds.p10, thresholds.p25
        ));
    }
    out.push('\n');

    out.push_str(&format!(
        "{:<10}  {:>12}  {:<12}  {:<7}  {:<9}\n",
        "Month", "Level (hm³)", "Status", "Drought", "Low level"
    ));
    for month in &response.prediccion_mensual {
        out.push_str(&format!(
            "{:<10}  {:>12.1}  {:<12}  {:<7}  {:<9}\n",
            month.fecha,
            month.nivel,
            month.estado,
            if month.es_sequia { "yes" } else { "no" },
            if month.nivel_bajo { "yes" } else { "no" }
        ));
    }

    out
}

/// Write the report to a timestamped file, returning its path.
pub fn export_report(
    request: &PredictionRequest,
    response: &PredictionResponse,
) -> Result<PathBuf> {
    let dir = reports_dir().ok_or_else(|| anyhow!("could not determine home directory"))?;
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    let filename = format!("forecast-{}.txt", Local::now().format("%Y%m%d-%H%M%S"));
    let path = dir.join(filename);
    fs::write(&path, render_report(request, response))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::forecast::{MonthlyForecast, RiskLevel, Scenario};

    fn sample() -> (PredictionRequest, PredictionResponse) {
        let request = PredictionRequest {
            horizonte_meses: 2,
            escenario: Scenario::Seco,
            nivel_actual_usuario: Some(700.0),
        };
        let response = PredictionResponse {
            riesgo_general: RiskLevel::Moderado,
            sequia_probable: false,
            prediccion_mensual: vec![
                MonthlyForecast {
                    fecha: "2025-01".to_string(),
                    nivel: 640.2,
                    estado: "Normal".to_string(),
                    es_sequia: false,
                    nivel_bajo: false,
                },
                MonthlyForecast {
                    fecha: "2025-02".to_string(),
                    nivel: 598.7,
                    estado: "Riesgo".to_string(),
                    es_sequia: false,
                    nivel_bajo: true,
                },
            ],
            umbrales: None,
        };
        (request, response)
    }

    #[test]
    fn test_report_lists_every_month_in_order() {
        let (request, response) = sample();
        let report = render_report(&request, &response);

        let first = report.find("2025-01").unwrap();
        let second = report.find("2025-02").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_report_carries_request_summary() {
        let (request, response) = sample();
        let report = render_report(&request, &response);

        assert!(report.contains("Horizon: 2 months"));
        assert!(report.contains("Scenario: Seco"));
        assert!(report.contains("700.0"));
        assert!(report.contains("Moderado"));
    }
}
