//! Fin calculation endpoint.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use tracing::debug;
use twine_core::Model;
use uom::si::{
    area::square_meter,
    f64::{Area, HeatTransfer, Length, ThermalConductivity, ThermodynamicTemperature},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    power::watt,
    ratio::ratio,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::models::fin::{FinInputs, FinResults, RectangularFin};
use crate::support::constraint::{NonNegative, StrictlyPositive};

use super::{ApiError, ApiResult};

/// Wire-format request for the fin calculator.
#[derive(Debug, Clone, Deserialize)]
pub struct FinRequest {
    /// Fin perimeter (m).
    #[serde(rename = "P")]
    pub perimeter: f64,

    /// Fin cross-sectional area (m²).
    #[serde(rename = "Ac")]
    pub cross_section: f64,

    /// Fin length (m).
    #[serde(rename = "L")]
    pub length: f64,

    /// Thermal conductivity of the fin material (W/m·K).
    #[serde(rename = "k")]
    pub conductivity: f64,

    /// Convective heat transfer coefficient (W/m²·K).
    #[serde(rename = "h_conv")]
    pub convection: f64,

    /// Fin base temperature (K).
    #[serde(rename = "T_base")]
    pub base_temperature: f64,

    /// Ambient fluid temperature (K).
    #[serde(rename = "T_inf")]
    pub ambient_temperature: f64,

    /// Number of profile samples; defaults to 100.
    #[serde(default = "default_points")]
    pub n_points: i64,
}

fn default_points() -> i64 {
    FinInputs::DEFAULT_SAMPLES.get() as i64
}

impl FinRequest {
    fn validate(&self) -> ApiResult<FinInputs> {
        let cross_section = StrictlyPositive::new(Area::new::<square_meter>(self.cross_section))
            .map_err(|_| ApiError::invalid("Cross-sectional area 'Ac' must be positive."))?;
        let perimeter = StrictlyPositive::new(Length::new::<meter>(self.perimeter))
            .map_err(|_| ApiError::invalid("Perimeter 'P' must be positive."))?;
        let conductivity = StrictlyPositive::new(ThermalConductivity::new::<
            watt_per_meter_kelvin,
        >(self.conductivity))
        .map_err(|_| ApiError::invalid("Thermal conductivity 'k' must be positive."))?;
        let length = NonNegative::new(Length::new::<meter>(self.length))
            .map_err(|_| ApiError::invalid("Fin length 'L' must be non-negative."))?;
        let convection = NonNegative::new(HeatTransfer::new::<watt_per_square_meter_kelvin>(
            self.convection,
        ))
        .map_err(|_| ApiError::invalid("Convection coefficient 'h_conv' must be non-negative."))?;
        let samples = usize::try_from(self.n_points)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or_else(|| ApiError::invalid("Parameter 'n_points' must be a positive integer."))?;

        Ok(FinInputs {
            perimeter,
            cross_section,
            length,
            conductivity,
            convection,
            base_temperature: ThermodynamicTemperature::new::<kelvin>(self.base_temperature),
            ambient_temperature: ThermodynamicTemperature::new::<kelvin>(self.ambient_temperature),
            samples,
        })
    }
}

/// Wire-format response for the fin calculator.
#[derive(Debug, Clone, Serialize)]
pub struct FinResponse {
    /// Sampled positions along the fin (m).
    pub x_coords: Vec<f64>,

    /// Temperature at each sampled position (K).
    pub temp_dist: Vec<f64>,

    /// Heat transfer rate from the fin (W).
    pub heat_transfer_rate: f64,

    /// Fin efficiency.
    pub fin_efficiency: f64,
}

impl From<FinResults> for FinResponse {
    fn from(results: FinResults) -> Self {
        Self {
            x_coords: results.positions.iter().map(|x| x.get::<meter>()).collect(),
            temp_dist: results
                .temperatures
                .iter()
                .map(|t| t.get::<kelvin>())
                .collect(),
            heat_transfer_rate: results.heat_rate.get::<watt>(),
            fin_efficiency: results.efficiency.get::<ratio>(),
        }
    }
}

/// Parses a JSON payload and runs the fin calculator.
///
/// # Errors
///
/// Returns an [`ApiError`] for a malformed payload or an out-of-range
/// parameter. The calculator itself never fails.
pub fn handle(body: &str) -> ApiResult<FinResponse> {
    let request: FinRequest = serde_json::from_str(body)?;
    calculate(&request)
}

/// Runs the fin calculator for an already-parsed request.
///
/// # Errors
///
/// Returns an [`ApiError`] for an out-of-range parameter.
pub fn calculate(request: &FinRequest) -> ApiResult<FinResponse> {
    let inputs = request.validate()?;
    debug!(samples = inputs.samples.get(), "running fin calculator");
    let results = RectangularFin
        .call(&inputs)
        .unwrap_or_else(|never| match never {});
    Ok(FinResponse::from(results))
}
