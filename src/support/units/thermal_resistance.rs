use std::ops::Div;

use uom::si::{
    f64::{Power, TemperatureInterval},
    power::watt,
    temperature_interval::kelvin,
};

/// Thermal resistance, the reciprocal of thermal conductance.
///
/// A conduction layer of thickness `t`, conductivity `k`, and area `A` has
/// resistance `t / (k·A)` in kelvin per watt. `uom` names thermal
/// conductance (W/K) but not its reciprocal, so the K/W quantity is derived
/// here as the quotient of a temperature interval and a power; arithmetic
/// such as `thickness / (conductivity * area)` or `delta_t / resistance`
/// resolves to the same dimension and type-checks against this alias.
pub type ThermalResistance = <TemperatureInterval as Div<Power>>::Output;

/// Creates a [`ThermalResistance`] from a value in kelvin per watt.
#[must_use]
pub fn kelvin_per_watt(value: f64) -> ThermalResistance {
    TemperatureInterval::new::<kelvin>(value) / Power::new::<watt>(1.0)
}

/// Extension trait for reading a [`ThermalResistance`] in kelvin per watt.
pub trait KelvinPerWatt {
    /// Returns the resistance in kelvin per watt.
    fn get_kelvin_per_watt(&self) -> f64;
}

impl KelvinPerWatt for ThermalResistance {
    fn get_kelvin_per_watt(&self) -> f64 {
        // `uom` stores quantities in coherent SI base units, so the raw
        // value of a K-per-W quantity is already kelvin per watt.
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter,
        f64::{Area, Length, ThermalConductivity},
        length::meter,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    #[test]
    fn layer_arithmetic_has_resistance_dimension() {
        let thickness = Length::new::<meter>(0.1);
        let conductivity = ThermalConductivity::new::<watt_per_meter_kelvin>(1.0);
        let area = Area::new::<square_meter>(1.0);

        let resistance: ThermalResistance = thickness / (conductivity * area);

        assert_relative_eq!(resistance.get_kelvin_per_watt(), 0.1);
    }

    #[test]
    fn flux_from_interval_over_resistance() {
        let delta_t = TemperatureInterval::new::<kelvin>(80.0);
        let resistance = kelvin_per_watt(0.1);

        let q: Power = delta_t / resistance;

        assert_relative_eq!(q.get::<watt>(), 800.0);
    }
}
