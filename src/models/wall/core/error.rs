use thiserror::Error;

use crate::support::units::ThermalResistance;

/// Errors reported by the composite wall calculator.
///
/// Degenerate walls are reported, not raised; the boundary layer decides
/// how to signal them. Variants carry whatever partial results remain
/// meaningful.
#[derive(Debug, Clone, Error)]
pub enum WallError {
    /// The layer list was empty. Total resistance and heat rate are zero
    /// by convention.
    #[error("No layers provided for the wall.")]
    NoLayers,

    /// The total resistance summed to zero while the surface temperatures
    /// differ, which would imply infinite heat flux. The heat rate is left
    /// undefined; the per-layer resistances (all zero) are still reported.
    #[error(
        "Total thermal resistance is zero with a non-zero temperature difference. \
         This implies infinite heat flux or direct contact with zero resistance layers."
    )]
    InfiniteHeatFlux {
        /// Resistance of each layer, in input order.
        layer_resistances: Vec<ThermalResistance>,
    },
}
