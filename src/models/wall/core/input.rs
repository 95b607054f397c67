use uom::si::f64::{Area, Length, ThermalConductivity, ThermodynamicTemperature};

use crate::support::constraint::{Constrained, NonNegative, StrictlyPositive};
use crate::support::units::ThermalResistance;

/// One conduction layer of a composite wall.
///
/// Conductivity and area are strictly positive by construction, so a
/// layer's resistance `t / (k·A)` is always finite. Thickness may be zero,
/// which models a contact plane contributing no resistance.
#[derive(Debug, Clone, Copy)]
pub struct Layer {
    /// Layer thickness in the conduction direction.
    pub thickness: Constrained<Length, NonNegative>,

    /// Thermal conductivity of the layer material.
    pub conductivity: Constrained<ThermalConductivity, StrictlyPositive>,

    /// Cross-sectional area normal to the conduction direction.
    pub area: Constrained<Area, StrictlyPositive>,
}

impl Layer {
    /// Conduction resistance of this layer, `t / (k·A)`.
    #[must_use]
    pub fn resistance(&self) -> ThermalResistance {
        self.thickness.into_inner() / (self.conductivity.into_inner() * self.area.into_inner())
    }
}

/// Validated inputs for the composite wall calculator.
#[derive(Debug, Clone)]
pub struct WallInputs {
    /// Ordered layers, from the inner surface outward.
    pub layers: Vec<Layer>,

    /// Temperature at the inner wall surface.
    pub inner_temperature: ThermodynamicTemperature,

    /// Temperature at the outer wall surface.
    pub outer_temperature: ThermodynamicTemperature,
}
