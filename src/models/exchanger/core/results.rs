use uom::si::f64::{Power, ThermodynamicTemperature};

use crate::support::hx::{Effectiveness, Ntu};

/// Performance figures for a heat exchanger.
#[derive(Debug, Clone, Copy)]
pub struct ExchangerResults {
    /// Number of transfer units, `UA / C_min`.
    ///
    /// Unbounded when one stream has a zero capacitance rate and the
    /// conductance is positive.
    pub ntu: Ntu,

    /// Exchanger effectiveness, in [0, 1].
    pub effectiveness: Effectiveness,

    /// Actual heat rate transferred from the hot to the cold stream.
    pub heat_rate: Power,

    /// Hot stream outlet temperature.
    pub hot_outlet: ThermodynamicTemperature,

    /// Cold stream outlet temperature.
    pub cold_outlet: ThermodynamicTemperature,
}
