//! Wire types for the prediction backend
//!
//! Field names follow the backend's JSON contract, which is Spanish
//! (`horizonte_meses`, `riesgo_general`, ...). Display labels are attached
//! here so components never match on wire strings.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Climate scenario applied to the forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    Normal,
    Seco,
    MuySeco,
    Humedo,
}

impl Scenario {
    pub fn all() -> [Scenario; 4] {
        [
            Scenario::Normal,
            Scenario::Seco,
            Scenario::MuySeco,
            Scenario::Humedo,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Scenario::Normal => "Normal",
            Scenario::Seco => "Seco",
            Scenario::MuySeco => "Muy seco",
            Scenario::Humedo => "Húmedo",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Scenario::Normal => "Historical average rainfall",
            Scenario::Seco => "Below-average rainfall",
            Scenario::MuySeco => "Sustained severe drought conditions",
            Scenario::Humedo => "Above-average rainfall",
        }
    }

    /// Next scenario in display order, wrapping around
    pub fn next(&self) -> Scenario {
        match self {
            Scenario::Normal => Scenario::Seco,
            Scenario::Seco => Scenario::MuySeco,
            Scenario::MuySeco => Scenario::Humedo,
            Scenario::Humedo => Scenario::Normal,
        }
    }

    pub fn prev(&self) -> Scenario {
        match self {
            Scenario::Normal => Scenario::Humedo,
            Scenario::Seco => Scenario::Normal,
            Scenario::MuySeco => Scenario::Seco,
            Scenario::Humedo => Scenario::MuySeco,
        }
    }
}

/// Overall drought-risk category returned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Bajo,
    Moderado,
    Alto,
    Critico,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Bajo => "Bajo",
            RiskLevel::Moderado => "Moderado",
            RiskLevel::Alto => "Alto",
            RiskLevel::Critico => "Crítico",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            RiskLevel::Bajo => Color::Green,
            RiskLevel::Moderado => Color::Yellow,
            RiskLevel::Alto => Color::LightRed,
            RiskLevel::Critico => Color::Red,
        }
    }
}

/// Request body for `POST /predict`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub horizonte_meses: u32,
    pub escenario: Scenario,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nivel_actual_usuario: Option<f64>,
}

/// One forecast month in the response, in chronological order
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MonthlyForecast {
    pub fecha: String,
    pub nivel: f64,
    pub estado: String,
    pub es_sequia: bool,
    pub nivel_bajo: bool,
}

/// Historical risk thresholds (10th and 25th percentile of observed levels)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Thresholds {
    pub p10: f64,
    pub p25: f64,
}

/// Response body for `POST /predict`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionResponse {
    pub riesgo_general: RiskLevel,
    pub sequia_probable: bool,
    pub prediccion_mensual: Vec<MonthlyForecast>,
    #[serde(default)]
    pub umbrales: Option<Thresholds>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = PredictionRequest {
            horizonte_meses: 12,
            escenario: Scenario::MuySeco,
            nivel_actual_usuario: Some(810.0),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["horizonte_meses"], 12);
        assert_eq!(json["escenario"], "muy_seco");
        assert_eq!(json["nivel_actual_usuario"], 810.0);
    }

    #[test]
    fn test_request_omits_absent_level() {
        let request = PredictionRequest {
            horizonte_meses: 3,
            escenario: Scenario::Normal,
            nivel_actual_usuario: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("nivel_actual_usuario").is_none());
    }

    #[test]
    fn test_response_parses_backend_shape() {
        let body = r#"{
            "riesgo_general": "alto",
            "sequia_probable": true,
            "prediccion_mensual": [
                {"fecha": "2025-01", "nivel": 512.3, "estado": "Riesgo",
                 "es_sequia": false, "nivel_bajo": true},
                {"fecha": "2025-02", "nivel": 488.9, "estado": "Sequía",
                 "es_sequia": true, "nivel_bajo": true}
            ],
            "umbrales": {"p10": 480.0, "p25": 560.5}
        }"#;

        let response: PredictionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.riesgo_general, RiskLevel::Alto);
        assert!(response.sequia_probable);
        assert_eq!(response.prediccion_mensual.len(), 2);
        assert_eq!(response.prediccion_mensual[0].fecha, "2025-01");
        assert!(response.prediccion_mensual[1].es_sequia);
        assert_eq!(response.umbrales.unwrap().p10, 480.0);
    }

    #[test]
    fn test_response_without_thresholds() {
        let body = r#"{
            "riesgo_general": "bajo",
            "sequia_probable": false,
            "prediccion_mensual": []
        }"#;

        let response: PredictionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.riesgo_general, RiskLevel::Bajo);
        assert!(response.umbrales.is_none());
    }

    #[test]
    fn test_scenario_cycle_covers_all() {
        let mut seen = vec![Scenario::Normal];
        let mut current = Scenario::Normal;
        for _ in 0..3 {
            current = current.next();
            seen.push(current);
        }
        assert_eq!(current.next(), Scenario::Normal);
        for scenario in Scenario::all() {
            assert!(seen.contains(&scenario));
        }
    }
}
