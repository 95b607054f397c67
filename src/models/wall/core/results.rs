use uom::si::f64::Power;

use crate::support::units::ThermalResistance;

/// Resistance network and heat rate for a composite wall.
#[derive(Debug, Clone)]
pub struct WallResults {
    /// Sum of the per-layer resistances.
    pub total_resistance: ThermalResistance,

    /// Resistance of each layer, in input order.
    pub layer_resistances: Vec<ThermalResistance>,

    /// Heat rate through the wall, `(T_inner − T_outer) / R_total`.
    pub heat_rate: Power,
}
