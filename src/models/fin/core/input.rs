use std::num::NonZeroUsize;

use uom::si::f64::{Area, HeatTransfer, Length, ThermalConductivity, ThermodynamicTemperature};

use crate::support::constraint::{Constrained, NonNegative, StrictlyPositive};

/// Validated inputs for the rectangular fin calculator.
///
/// Geometry and material bounds are carried in the types: a perimeter,
/// cross-section, or conductivity that is not strictly positive cannot be
/// constructed, so the solver never needs a division-by-zero guard for
/// them. Length and convection coefficient may be zero; both produce
/// degenerate-but-answerable configurations.
#[derive(Debug, Clone, Copy)]
pub struct FinInputs {
    /// Fin perimeter.
    pub perimeter: Constrained<Length, StrictlyPositive>,

    /// Fin cross-sectional area.
    pub cross_section: Constrained<Area, StrictlyPositive>,

    /// Fin length from base to tip.
    pub length: Constrained<Length, NonNegative>,

    /// Thermal conductivity of the fin material.
    pub conductivity: Constrained<ThermalConductivity, StrictlyPositive>,

    /// Convective heat transfer coefficient of the surrounding fluid.
    pub convection: Constrained<HeatTransfer, NonNegative>,

    /// Temperature at the fin base.
    pub base_temperature: ThermodynamicTemperature,

    /// Ambient fluid temperature.
    pub ambient_temperature: ThermodynamicTemperature,

    /// Number of evenly spaced samples for the temperature profile.
    pub samples: NonZeroUsize,
}

impl FinInputs {
    /// Default profile sample count.
    pub const DEFAULT_SAMPLES: NonZeroUsize = NonZeroUsize::new(100).unwrap();
}
