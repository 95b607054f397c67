//! Computation core for the rectangular fin calculator.
//!
//! The profile and performance figures are closed forms of the inputs. The
//! degenerate cases resolve by policy, not by accident:
//!
//! - `T_base == T_inf`: no driving temperature difference. The profile is
//!   uniformly ambient, the heat rate is zero, and the efficiency is
//!   defined as 1 (sidestepping the 0/0 ratio).
//! - `m == 0` or `L == 0`: no spatial decay is possible. The profile is
//!   uniformly the base temperature and the heat rate is zero.
//! - A zero efficiency denominator (`h`, or `L` zero): efficiency is
//!   defined as 1.
//!
//! Positive efficiencies are capped at unity; negative ones pass through
//! unchanged.

mod input;
mod profile;
mod results;

pub use input::FinInputs;
pub use results::FinResults;

use uom::si::{
    area::square_meter,
    f64::{Length, Power, Ratio, ThermodynamicTemperature},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    power::watt,
    ratio::ratio,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

/// Solves the fin profile and performance for validated inputs.
///
/// Never fails: every point of the input domain maps to a numeric result
/// through the fallback policies documented on this module.
pub(crate) fn solve(inputs: &FinInputs) -> FinResults {
    let perimeter = inputs.perimeter.as_ref().get::<meter>();
    let cross_section = inputs.cross_section.as_ref().get::<square_meter>();
    let length = inputs.length.as_ref().get::<meter>();
    let conductivity = inputs.conductivity.as_ref().get::<watt_per_meter_kelvin>();
    let h_conv = inputs.convection.as_ref().get::<watt_per_square_meter_kelvin>();
    let t_base = inputs.base_temperature.get::<kelvin>();
    let t_inf = inputs.ambient_temperature.get::<kelvin>();

    // Fin parameter. Geometry and conductivity are strictly positive by
    // construction, so the only degenerate source is h == 0.
    let m = (h_conv * perimeter / (conductivity * cross_section)).sqrt();

    let positions = profile::sample_positions(length, inputs.samples.get());
    let temperatures = profile::temperatures(&positions, m, length, t_base, t_inf);

    let heat_rate = if t_base == t_inf || m == 0.0 || length == 0.0 {
        0.0
    } else {
        (h_conv * perimeter * conductivity * cross_section).sqrt()
            * (t_base - t_inf)
            * (m * length).tanh()
    };

    let efficiency = efficiency(heat_rate, h_conv, perimeter, length, t_base, t_inf);

    FinResults {
        positions: positions.into_iter().map(Length::new::<meter>).collect(),
        temperatures: temperatures
            .into_iter()
            .map(ThermodynamicTemperature::new::<kelvin>)
            .collect(),
        heat_rate: Power::new::<watt>(heat_rate),
        efficiency: Ratio::new::<ratio>(efficiency),
    }
}

/// Efficiency `q / (h·P·L·ΔT)` under the documented fallback policy.
fn efficiency(
    heat_rate: f64,
    h_conv: f64,
    perimeter: f64,
    length: f64,
    t_base: f64,
    t_inf: f64,
) -> f64 {
    let denominator = h_conv * perimeter * length * (t_base - t_inf);
    if t_base == t_inf || denominator == 0.0 {
        return 1.0;
    }
    let raw = heat_rate / denominator;
    // Cap positive ratios at unity (floating-point can push the ratio just
    // past 1); negative ratios pass through unchanged.
    if raw > 0.0 { raw.min(1.0) } else { raw }
}

#[cfg(test)]
pub(crate) fn test_inputs(
    perimeter: f64,
    cross_section: f64,
    length: f64,
    conductivity: f64,
    h_conv: f64,
    t_base: f64,
    t_inf: f64,
    samples: usize,
) -> crate::support::constraint::ConstraintResult<FinInputs> {
    use crate::support::constraint::{NonNegative, StrictlyPositive};
    use std::num::NonZeroUsize;
    use uom::si::f64::{Area, HeatTransfer, ThermalConductivity};

    Ok(FinInputs {
        perimeter: StrictlyPositive::new(Length::new::<meter>(perimeter))?,
        cross_section: StrictlyPositive::new(Area::new::<square_meter>(cross_section))?,
        length: NonNegative::new(Length::new::<meter>(length))?,
        conductivity: StrictlyPositive::new(ThermalConductivity::new::<watt_per_meter_kelvin>(
            conductivity,
        ))?,
        convection: NonNegative::new(HeatTransfer::new::<watt_per_square_meter_kelvin>(h_conv))?,
        base_temperature: ThermodynamicTemperature::new::<kelvin>(t_base),
        ambient_temperature: ThermodynamicTemperature::new::<kelvin>(t_inf),
        samples: NonZeroUsize::new(samples).expect("test sample count should be positive"),
    })
}
