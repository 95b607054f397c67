use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// Subtracts two [`ThermodynamicTemperature`] values (absolute
/// temperatures) and returns a [`TemperatureInterval`] (temperature
/// difference). `uom` keeps the two quantities apart by kind, which rules
/// out the `-` operator between absolute temperatures; this trait supplies
/// the missing operation.
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn subtract_temperatures() {
        let t1 = ThermodynamicTemperature::new::<abs_kelvin>(373.0);
        let t2 = ThermodynamicTemperature::new::<abs_kelvin>(293.0);

        assert_relative_eq!(t1.minus(t2).get::<delta_kelvin>(), 80.0);
        assert_relative_eq!(t2.minus(t1).get::<delta_kelvin>(), -80.0);
        assert_relative_eq!(t1.minus(t1).get::<delta_kelvin>(), 0.0);
    }
}
