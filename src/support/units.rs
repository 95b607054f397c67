//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities. This module
//! provides the small extensions the calculators need that aren't included
//! in [`uom`] itself:
//!
//! - [`TemperatureDifference`], a trait with a
//!   [`minus`](TemperatureDifference::minus) method for subtracting one
//!   absolute temperature from another to get a temperature interval.
//!   `uom` deliberately gives [`ThermodynamicTemperature`] its own kind, so
//!   plain `-` between two absolute temperatures does not compile.
//! - [`ThermalResistance`] (kelvin per watt), the reciprocal of `uom`'s
//!   thermal conductance, derived here as the quotient dimension of a
//!   temperature interval and a power.
//!
//! [`ThermodynamicTemperature`]: uom::si::f64::ThermodynamicTemperature

mod temperature_difference;
mod thermal_resistance;

pub use temperature_difference::TemperatureDifference;
pub use thermal_resistance::{KelvinPerWatt, ThermalResistance, kelvin_per_watt};
