//! Flow arrangements supported by the heat exchanger calculator.

mod counter_flow;
mod parallel_flow;

pub use counter_flow::CounterFlow;
pub use parallel_flow::ParallelFlow;

use serde::{Deserialize, Serialize};

use super::{CapacityRatio, Effectiveness, Ntu, effectiveness_ntu::EffectivenessRelation};

/// Flow arrangement token accepted at the request boundary.
///
/// Deserializes from the lowercase tokens `"parallel"` and `"counterflow"`;
/// any other token fails to parse, which is how an invalid arrangement is
/// rejected before any computation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowArrangement {
    Parallel,
    Counterflow,
}

impl EffectivenessRelation for FlowArrangement {
    fn effectiveness(&self, ntu: Ntu, capacity_ratio: CapacityRatio) -> Effectiveness {
        match self {
            Self::Parallel => ParallelFlow.effectiveness(ntu, capacity_ratio),
            Self::Counterflow => CounterFlow.effectiveness(ntu, capacity_ratio),
        }
    }
}
