//! Heat exchanger calculation endpoint.

use serde::{Deserialize, Serialize};
use tracing::debug;
use twine_core::Model;
use uom::si::{
    f64::{MassRate, SpecificHeatCapacity, ThermalConductance, ThermodynamicTemperature},
    mass_rate::kilogram_per_second,
    power::watt,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductance::watt_per_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::models::exchanger::{ExchangerInputs, ExchangerResults, NtuExchanger, StreamInlet};
use crate::support::constraint::NonNegative;
use crate::support::hx::{CapacitanceRate, FlowArrangement};

use super::{ApiError, ApiResult};

/// Wire-format request for the heat exchanger calculator.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangerRequest {
    /// Hot stream mass flow rate (kg/s).
    pub m_dot_hot: f64,

    /// Hot stream specific heat (J/kg·K).
    #[serde(rename = "Cp_hot")]
    pub cp_hot: f64,

    /// Hot stream inlet temperature (K).
    #[serde(rename = "T_in_hot")]
    pub t_in_hot: f64,

    /// Cold stream mass flow rate (kg/s).
    pub m_dot_cold: f64,

    /// Cold stream specific heat (J/kg·K).
    #[serde(rename = "Cp_cold")]
    pub cp_cold: f64,

    /// Cold stream inlet temperature (K).
    #[serde(rename = "T_in_cold")]
    pub t_in_cold: f64,

    /// Overall conductance UA (W/K).
    #[serde(rename = "UA")]
    pub ua: f64,

    /// Flow arrangement token: `"parallel"` or `"counterflow"`.
    pub flow_type: String,
}

impl ExchangerRequest {
    fn validate(&self) -> ApiResult<ExchangerInputs> {
        let arrangement = match self.flow_type.as_str() {
            "parallel" => FlowArrangement::Parallel,
            "counterflow" => FlowArrangement::Counterflow,
            _ => {
                return Err(ApiError::invalid(
                    "Parameter 'flow_type' must be 'parallel' or 'counterflow'.",
                ));
            }
        };

        let hot = stream_inlet(self.m_dot_hot, self.cp_hot, self.t_in_hot, "m_dot_hot", "Cp_hot")?;
        let cold = stream_inlet(
            self.m_dot_cold,
            self.cp_cold,
            self.t_in_cold,
            "m_dot_cold",
            "Cp_cold",
        )?;

        let conductance = NonNegative::new(ThermalConductance::new::<watt_per_kelvin>(self.ua))
            .map_err(|_| ApiError::invalid("Parameter 'UA' must be non-negative."))?;

        Ok(ExchangerInputs {
            hot,
            cold,
            conductance,
            arrangement,
        })
    }
}

fn stream_inlet(
    m_dot: f64,
    cp: f64,
    temperature: f64,
    m_dot_name: &str,
    cp_name: &str,
) -> ApiResult<StreamInlet> {
    let m_dot = NonNegative::new(MassRate::new::<kilogram_per_second>(m_dot))
        .map_err(|_| ApiError::invalid(format!("Parameter '{m_dot_name}' must be non-negative.")))?;
    let cp = NonNegative::new(SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(cp))
        .map_err(|_| ApiError::invalid(format!("Parameter '{cp_name}' must be non-negative.")))?;

    let capacitance_rate =
        CapacitanceRate::from_mass_rate_and_specific_heat(m_dot.into_inner(), cp.into_inner())
            .expect("product of non-negative flow rate and specific heat is non-negative");

    Ok(StreamInlet::new(
        capacitance_rate,
        ThermodynamicTemperature::new::<kelvin>(temperature),
    ))
}

/// Wire-format response for the heat exchanger calculator.
#[derive(Debug, Clone, Serialize)]
pub struct ExchangerResponse {
    /// Number of transfer units; `null` when unbounded.
    #[serde(rename = "NTU")]
    pub ntu: Option<f64>,

    /// Exchanger effectiveness.
    pub effectiveness: f64,

    /// Actual heat rate (W).
    pub q_actual: f64,

    /// Hot stream outlet temperature (K).
    #[serde(rename = "T_out_hot")]
    pub t_out_hot: f64,

    /// Cold stream outlet temperature (K).
    #[serde(rename = "T_out_cold")]
    pub t_out_cold: f64,
}

impl From<ExchangerResults> for ExchangerResponse {
    fn from(results: ExchangerResults) -> Self {
        let ntu = results.ntu.get::<ratio>();
        Self {
            // JSON has no representation for IEEE infinity.
            ntu: ntu.is_finite().then_some(ntu),
            effectiveness: results.effectiveness.get::<ratio>(),
            q_actual: results.heat_rate.get::<watt>(),
            t_out_hot: results.hot_outlet.get::<kelvin>(),
            t_out_cold: results.cold_outlet.get::<kelvin>(),
        }
    }
}

/// Parses a JSON payload and runs the heat exchanger calculator.
///
/// # Errors
///
/// Returns an [`ApiError`] for a malformed payload, an out-of-range
/// parameter, or a degenerate configuration reported by the calculator.
pub fn handle(body: &str) -> ApiResult<ExchangerResponse> {
    let request: ExchangerRequest = serde_json::from_str(body)?;
    calculate(&request)
}

/// Runs the heat exchanger calculator for an already-parsed request.
///
/// # Errors
///
/// Returns an [`ApiError`] for an out-of-range parameter or a degenerate
/// configuration reported by the calculator.
pub fn calculate(request: &ExchangerRequest) -> ApiResult<ExchangerResponse> {
    let inputs = request.validate()?;
    debug!(arrangement = ?inputs.arrangement, "running heat exchanger calculator");
    let results = NtuExchanger.call(&inputs)?;
    Ok(ExchangerResponse::from(results))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn request_body(flow_type: &str) -> String {
        format!(
            r#"{{
                "m_dot_hot": 2.0, "Cp_hot": 1000.0, "T_in_hot": 400.0,
                "m_dot_cold": 1.0, "Cp_cold": 1000.0, "T_in_cold": 300.0,
                "UA": 1000.0, "flow_type": "{flow_type}"
            }}"#
        )
    }

    #[test]
    fn parallel_flow_reference_case() {
        let response = handle(&request_body("parallel")).unwrap();

        let expected_eff = (1.0 - (-1.5_f64).exp()) / 1.5;
        assert_relative_eq!(response.ntu.unwrap(), 1.0);
        assert_relative_eq!(response.effectiveness, expected_eff);
        assert_relative_eq!(response.q_actual, expected_eff * 100_000.0);
    }

    #[test]
    fn unknown_flow_type_is_rejected() {
        let error = handle(&request_body("crossflow")).unwrap_err();

        assert_eq!(
            error.to_string(),
            "Parameter 'flow_type' must be 'parallel' or 'counterflow'."
        );
    }

    #[test]
    fn negative_flow_rate_is_rejected() {
        let body = request_body("parallel").replace("\"m_dot_cold\": 1.0", "\"m_dot_cold\": -1.0");
        let error = handle(&body).unwrap_err();

        assert_eq!(
            error.to_string(),
            "Parameter 'm_dot_cold' must be non-negative."
        );
    }

    #[test]
    fn inverted_inlets_map_to_a_client_error() {
        let body = request_body("counterflow").replace("\"T_in_hot\": 400.0", "\"T_in_hot\": 250.0");
        let error = handle(&body).unwrap_err();

        assert!(matches!(error, ApiError::Exchanger(_)));
        assert_eq!(error.status(), 400);
    }

    #[test]
    fn idle_hot_stream_serializes_ntu_as_null() {
        let body = request_body("parallel").replace("\"m_dot_hot\": 2.0", "\"m_dot_hot\": 0.0");
        let response = handle(&body).unwrap();

        assert!(response.ntu.is_none());
        assert_relative_eq!(response.effectiveness, 0.0);
        assert_relative_eq!(response.q_actual, 0.0);
        assert_relative_eq!(response.t_out_hot, 400.0);
        assert_relative_eq!(response.t_out_cold, 300.0);

        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("NTU").unwrap().is_null());
    }
}
