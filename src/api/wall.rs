//! Composite wall calculation endpoint.

use serde::{Deserialize, Serialize};
use tracing::debug;
use twine_core::Model;
use uom::si::{
    area::square_meter,
    f64::{Area, Length, ThermalConductivity, ThermodynamicTemperature},
    length::meter,
    power::watt,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::models::wall::{CompositeWall, Layer, WallInputs, WallResults};
use crate::support::constraint::{NonNegative, StrictlyPositive};
use crate::support::units::KelvinPerWatt;

use super::{ApiError, ApiResult};

/// Wire-format description of one wall layer.
#[derive(Debug, Clone, Deserialize)]
pub struct LayerRequest {
    /// Layer thickness (m).
    pub thickness: f64,

    /// Thermal conductivity of the layer material (W/m·K).
    pub k_value: f64,

    /// Cross-sectional area (m²).
    pub area: f64,
}

impl LayerRequest {
    fn validate(&self, index: usize) -> ApiResult<Layer> {
        // Positions are 1-based in client-facing messages.
        let position = index + 1;
        let thickness = NonNegative::new(Length::new::<meter>(self.thickness)).map_err(|_| {
            ApiError::invalid(format!("Layer {position}: 'thickness' must be non-negative."))
        })?;
        let conductivity =
            StrictlyPositive::new(ThermalConductivity::new::<watt_per_meter_kelvin>(self.k_value))
                .map_err(|_| {
                    ApiError::invalid(format!("Layer {position}: 'k_value' must be positive."))
                })?;
        let area = StrictlyPositive::new(Area::new::<square_meter>(self.area)).map_err(|_| {
            ApiError::invalid(format!("Layer {position}: 'area' must be positive."))
        })?;

        Ok(Layer {
            thickness,
            conductivity,
            area,
        })
    }
}

/// Wire-format request for the composite wall calculator.
#[derive(Debug, Clone, Deserialize)]
pub struct WallRequest {
    /// Ordered wall layers, from the inner surface outward.
    pub layers: Vec<LayerRequest>,

    /// Inner surface temperature (K).
    #[serde(rename = "T_inner")]
    pub inner_temperature: f64,

    /// Outer surface temperature (K).
    #[serde(rename = "T_outer")]
    pub outer_temperature: f64,
}

impl WallRequest {
    fn validate(&self) -> ApiResult<WallInputs> {
        if self.layers.is_empty() {
            return Err(ApiError::invalid(
                "Parameter 'layers' must be a non-empty list.",
            ));
        }

        let layers = self
            .layers
            .iter()
            .enumerate()
            .map(|(index, layer)| layer.validate(index))
            .collect::<ApiResult<Vec<_>>>()?;

        Ok(WallInputs {
            layers,
            inner_temperature: ThermodynamicTemperature::new::<kelvin>(self.inner_temperature),
            outer_temperature: ThermodynamicTemperature::new::<kelvin>(self.outer_temperature),
        })
    }
}

/// Wire-format response for the composite wall calculator.
#[derive(Debug, Clone, Serialize)]
pub struct WallResponse {
    /// Total thermal resistance (K/W).
    pub total_resistance: f64,

    /// Heat rate through the wall (W).
    pub heat_flux: f64,

    /// Per-layer thermal resistances (K/W), in input order.
    pub individual_resistances: Vec<f64>,
}

impl From<WallResults> for WallResponse {
    fn from(results: WallResults) -> Self {
        Self {
            total_resistance: results.total_resistance.get_kelvin_per_watt(),
            heat_flux: results.heat_rate.get::<watt>(),
            individual_resistances: results
                .layer_resistances
                .iter()
                .map(KelvinPerWatt::get_kelvin_per_watt)
                .collect(),
        }
    }
}

/// Parses a JSON payload and runs the composite wall calculator.
///
/// # Errors
///
/// Returns an [`ApiError`] for a malformed payload, an out-of-range
/// parameter, or a degenerate wall reported by the calculator.
pub fn handle(body: &str) -> ApiResult<WallResponse> {
    let request: WallRequest = serde_json::from_str(body)?;
    calculate(&request)
}

/// Runs the composite wall calculator for an already-parsed request.
///
/// # Errors
///
/// Returns an [`ApiError`] for an out-of-range parameter or a degenerate
/// wall reported by the calculator.
pub fn calculate(request: &WallRequest) -> ApiResult<WallResponse> {
    let inputs = request.validate()?;
    debug!(layers = inputs.layers.len(), "running composite wall calculator");
    let results = CompositeWall.call(&inputs)?;
    Ok(WallResponse::from(results))
}
