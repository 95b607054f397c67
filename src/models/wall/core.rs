//! Computation core for the composite wall calculator.
//!
//! The resistance network is a plain series sum; all the policy lives in
//! the degenerate branches:
//!
//! - An empty layer list is an error; total resistance and heat rate are
//!   zero by convention.
//! - `R_total == 0` with `ΔT == 0` is the trivial wall: zero heat rate,
//!   not an error.
//! - `R_total == 0` with `ΔT != 0` would imply infinite heat flux; the
//!   heat rate is left undefined and the error carries the per-layer
//!   resistances for reporting.
//!
//! A layer with `k·A == 0` cannot be constructed ([`Layer`] requires
//! strictly positive conductivity and area), so the single resistance
//! formula here is the only one in the crate.

mod error;
mod input;
mod results;

pub use error::WallError;
pub use input::{Layer, WallInputs};
pub use results::WallResults;

use uom::ConstZero;
use uom::si::f64::{Power, TemperatureInterval};

use crate::support::units::{TemperatureDifference, ThermalResistance, kelvin_per_watt};

/// Solves the series resistance network for validated inputs.
///
/// # Errors
///
/// Returns a [`WallError`] for an empty layer list or a zero total
/// resistance facing a nonzero temperature difference.
pub(crate) fn solve(inputs: &WallInputs) -> Result<WallResults, WallError> {
    if inputs.layers.is_empty() {
        return Err(WallError::NoLayers);
    }

    let layer_resistances: Vec<ThermalResistance> =
        inputs.layers.iter().map(Layer::resistance).collect();
    let total_resistance = layer_resistances
        .iter()
        .copied()
        .fold(kelvin_per_watt(0.0), |sum, r| sum + r);

    let delta_t = inputs
        .inner_temperature
        .minus(inputs.outer_temperature);

    if total_resistance == ThermalResistance::ZERO {
        if delta_t == TemperatureInterval::ZERO {
            // No wall to speak of and no driving difference: trivially idle.
            return Ok(WallResults {
                total_resistance,
                layer_resistances,
                heat_rate: Power::ZERO,
            });
        }
        return Err(WallError::InfiniteHeatFlux { layer_resistances });
    }

    Ok(WallResults {
        total_resistance,
        layer_resistances,
        heat_rate: delta_t / total_resistance,
    })
}

#[cfg(test)]
pub(crate) fn test_layer(
    thickness: f64,
    conductivity: f64,
    area: f64,
) -> crate::support::constraint::ConstraintResult<Layer> {
    use crate::support::constraint::{NonNegative, StrictlyPositive};
    use uom::si::{
        area::square_meter, f64::Area, f64::Length, f64::ThermalConductivity, length::meter,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    Ok(Layer {
        thickness: NonNegative::new(Length::new::<meter>(thickness))?,
        conductivity: StrictlyPositive::new(ThermalConductivity::new::<watt_per_meter_kelvin>(
            conductivity,
        ))?,
        area: StrictlyPositive::new(Area::new::<square_meter>(area))?,
    })
}

#[cfg(test)]
pub(crate) fn test_inputs(layers: Vec<Layer>, t_inner: f64, t_outer: f64) -> WallInputs {
    use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

    WallInputs {
        layers,
        inner_temperature: ThermodynamicTemperature::new::<kelvin>(t_inner),
        outer_temperature: ThermodynamicTemperature::new::<kelvin>(t_outer),
    }
}
