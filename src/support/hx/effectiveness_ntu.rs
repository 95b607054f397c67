use std::ops::Deref;

use uom::ConstZero;
use uom::si::{
    f64::{Ratio, ThermalConductance},
    ratio::ratio,
};

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative, UnitInterval};

use super::{CapacitanceRate, CapacityRatio};

/// Trait for computing heat exchanger effectiveness from NTU.
///
/// Each flow arrangement supplies its own relation; the calculator picks
/// the arrangement and the shared machinery handles the `Cr == 0`
/// isothermal-stream limit once, for all arrangements.
pub trait EffectivenessRelation {
    /// Calculate the effectiveness for an arrangement given the [NTU](Ntu)
    /// and [capacity ratio](CapacityRatio).
    fn effectiveness(&self, ntu: Ntu, capacity_ratio: CapacityRatio) -> Effectiveness;
}

/// The effectiveness of a heat exchanger.
///
/// The ratio of the actual amount of heat transferred to the maximum
/// possible amount, always in the interval [0, 1].
#[derive(Debug, Clone, Copy)]
pub struct Effectiveness(Constrained<Ratio, UnitInterval>);

impl Effectiveness {
    /// Create an [`Effectiveness`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside the interval [0, 1].
    pub fn new(value: f64) -> ConstraintResult<Self> {
        let quantity = Ratio::new::<ratio>(value);
        Self::from_quantity(quantity)
    }

    /// Create an [`Effectiveness`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity lies outside the interval [0, 1].
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(quantity)?))
    }

    /// The zero effectiveness (no heat transferred).
    #[must_use]
    pub fn zero() -> Self {
        Self(UnitInterval::zero())
    }
}

impl Deref for Effectiveness {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// The number of transfer units for a heat exchanger.
///
/// NTU represents the dimensionless thermal size of an exchanger,
/// `UA / C_min`. It must be >= 0 and may be unbounded: a zero `C_min`
/// stream facing a positive conductance yields `+inf`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Ntu(Constrained<Ratio, NonNegative>);

impl Ntu {
    /// Create an [`Ntu`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is negative or NaN.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        let quantity = Ratio::new::<ratio>(value);
        Self::from_quantity(quantity)
    }

    /// Create an [`Ntu`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is negative or NaN.
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(NonNegative::new(quantity)?))
    }

    /// Create an [`Ntu`] from a heat exchanger conductance and the
    /// [capacitance rates](CapacitanceRate) of both streams.
    ///
    /// The minimum of the two rates defines the NTU. When that minimum is
    /// zero the ratio `UA / C_min` is taken in the limit: unbounded for a
    /// positive conductance, zero for a zero conductance.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the resulting NTU would be negative (for example,
    /// when `ua` is negative).
    pub fn from_conductance_and_capacitance_rates(
        ua: ThermalConductance,
        capacitance_rates: [CapacitanceRate; 2],
    ) -> ConstraintResult<Self> {
        let c_min = capacitance_rates[0].min(*capacitance_rates[1]);
        if c_min == ThermalConductance::ZERO {
            return if ua > ThermalConductance::ZERO {
                Self::new(f64::INFINITY)
            } else {
                Self::new(0.0)
            };
        }
        Self::from_quantity(ua / c_min)
    }
}

impl Deref for Ntu {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[inline]
pub(crate) fn effectiveness_via(
    ntu: Ntu,
    capacity_ratio: CapacityRatio,
    fn_raw: impl Fn(f64, f64) -> f64,
) -> Effectiveness {
    let cr = capacity_ratio.get::<ratio>();
    let ntu = ntu.get::<ratio>();
    if cr == 0.0 {
        return Effectiveness::new(1. - (-ntu).exp())
            .expect("ntu should always yield valid effectiveness");
    }
    Effectiveness::new(fn_raw(ntu, cr)).expect("ntu should always yield valid effectiveness")
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::thermal_conductance::watt_per_kelvin;

    use super::*;

    #[test]
    fn ntu_from_conductance_and_capacitance_rates() -> ConstraintResult<()> {
        let ua = ThermalConductance::new::<watt_per_kelvin>(10.0);
        let capacitance_rates = [
            CapacitanceRate::new::<watt_per_kelvin>(10.0)?,
            CapacitanceRate::new::<watt_per_kelvin>(20.0)?,
        ];

        let ntu = Ntu::from_conductance_and_capacitance_rates(ua, capacitance_rates)?;

        assert_relative_eq!(ntu.get::<ratio>(), 1.0);
        Ok(())
    }

    #[test]
    fn zero_min_rate_takes_the_limit() -> ConstraintResult<()> {
        let rates = [
            CapacitanceRate::zero(),
            CapacitanceRate::new::<watt_per_kelvin>(20.0)?,
        ];

        let unbounded = Ntu::from_conductance_and_capacitance_rates(
            ThermalConductance::new::<watt_per_kelvin>(5.0),
            rates,
        )?;
        assert!(unbounded.get::<ratio>().is_infinite());

        let idle = Ntu::from_conductance_and_capacitance_rates(
            ThermalConductance::new::<watt_per_kelvin>(0.0),
            rates,
        )?;
        assert_relative_eq!(idle.get::<ratio>(), 0.0);

        Ok(())
    }

    #[test]
    fn negative_conductance_is_rejected() -> ConstraintResult<()> {
        let rates = [
            CapacitanceRate::new::<watt_per_kelvin>(10.0)?,
            CapacitanceRate::new::<watt_per_kelvin>(20.0)?,
        ];

        let result = Ntu::from_conductance_and_capacitance_rates(
            ThermalConductance::new::<watt_per_kelvin>(-1.0),
            rates,
        );
        assert!(result.is_err());

        Ok(())
    }

    #[test]
    fn effectiveness_bounds() {
        assert!(Effectiveness::new(0.0).is_ok());
        assert!(Effectiveness::new(1.0).is_ok());
        assert!(Effectiveness::new(1.01).is_err());
        assert!(Effectiveness::new(-0.01).is_err());
        assert_relative_eq!(Effectiveness::zero().get::<ratio>(), 0.0);
    }
}
