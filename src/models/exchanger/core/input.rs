use uom::si::f64::{ThermalConductance, ThermodynamicTemperature};

use crate::support::constraint::{Constrained, NonNegative};
use crate::support::hx::{CapacitanceRate, FlowArrangement};

/// Inlet state for one stream entering the exchanger.
///
/// Assumes the stream's specific heat remains constant through the
/// exchanger, so the capacitance rate fully characterizes its thermal
/// response.
#[derive(Debug, Clone, Copy)]
pub struct StreamInlet {
    /// Capacitance rate (`m_dot` * `c_p`) of the stream; zero for no flow.
    pub capacitance_rate: CapacitanceRate,

    /// Temperature at the exchanger inlet.
    pub temperature: ThermodynamicTemperature,
}

impl StreamInlet {
    /// Capture the inlet capacitance rate and temperature.
    #[must_use]
    pub fn new(capacitance_rate: CapacitanceRate, temperature: ThermodynamicTemperature) -> Self {
        Self {
            capacitance_rate,
            temperature,
        }
    }
}

/// Validated inputs for the effectiveness-NTU exchanger calculator.
#[derive(Debug, Clone, Copy)]
pub struct ExchangerInputs {
    /// Hot stream inlet.
    pub hot: StreamInlet,

    /// Cold stream inlet.
    pub cold: StreamInlet,

    /// Overall conductance (UA) of the exchanger.
    pub conductance: Constrained<ThermalConductance, NonNegative>,

    /// Flow arrangement of the two streams.
    pub arrangement: FlowArrangement,
}
