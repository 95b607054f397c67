use thiserror::Error;
use uom::si::f64::ThermodynamicTemperature;

/// Errors reported by the exchanger calculator.
///
/// Degenerate configurations are reported, not raised; the boundary layer
/// decides how to signal them.
#[derive(Debug, Clone, Error)]
pub enum ExchangerError {
    /// The hot stream entered colder than the cold stream, which the NTU
    /// formulation does not model.
    #[error("Hot fluid inlet temperature must be greater than cold fluid inlet temperature.")]
    InletInversion {
        /// Hot stream inlet temperature.
        hot: ThermodynamicTemperature,

        /// Cold stream inlet temperature.
        cold: ThermodynamicTemperature,
    },

    /// Both streams carry a zero capacitance rate. NTU, effectiveness, and
    /// the heat rate are all zero, and both streams leave at their inlet
    /// temperatures.
    #[error("Both hot and cold fluid flow rates are zero. No heat transfer possible.")]
    NoCapacitance,
}
