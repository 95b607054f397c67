use std::ops::Deref;

use uom::ConstZero;
use uom::si::f64::{MassRate, SpecificHeatCapacity, ThermalConductance};

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative};

/// Capacitance rate (`m_dot` * `c_p`) of a stream in a heat exchanger.
///
/// The value must be non-negative. Zero is allowed: a stream with no mass
/// flow has a zero capacitance rate, and the exchanger calculator treats
/// that case explicitly rather than rejecting it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CapacitanceRate(Constrained<ThermalConductance, NonNegative>);

impl CapacitanceRate {
    /// Create a [`CapacitanceRate`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is negative or NaN.
    pub fn new<U>(value: f64) -> ConstraintResult<Self>
    where
        U: uom::si::thermal_conductance::Unit + uom::Conversion<f64, T = f64>,
    {
        let quantity = ThermalConductance::new::<U>(value);
        Self::from_quantity(quantity)
    }

    /// Create a [`CapacitanceRate`] from a quantity with thermal-conductance
    /// units.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is negative or NaN.
    pub fn from_quantity(quantity: ThermalConductance) -> ConstraintResult<Self> {
        Ok(Self(NonNegative::new(quantity)?))
    }

    /// Create a [`CapacitanceRate`] from a mass rate and specific heat
    /// capacity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the product is negative or NaN.
    pub fn from_mass_rate_and_specific_heat(
        mass_rate: MassRate,
        specific_heat: SpecificHeatCapacity,
    ) -> ConstraintResult<Self> {
        Self::from_quantity(mass_rate * specific_heat)
    }

    /// The zero capacitance rate (no flow).
    #[must_use]
    pub fn zero() -> Self {
        Self(NonNegative::zero())
    }

    /// Returns `true` for a stream with no capacitance.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self.0.as_ref() == ThermalConductance::ZERO
    }
}

impl Deref for CapacitanceRate {
    type Target = ThermalConductance;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
