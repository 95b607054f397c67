//! Effectiveness-NTU toolkit for heat exchanger analysis.
//!
//! Heat exchangers transfer thermal energy between two fluid streams. The
//! effectiveness-NTU method relates exchanger performance to its
//! dimensionless thermal size (NTU = UA / `C_min`) and the capacity ratio
//! of the streams.
//!
//! This module provides:
//!
//! - **Core types**: [`CapacitanceRate`], [`CapacityRatio`], [`Ntu`],
//!   [`Effectiveness`]
//! - **Flow arrangements**: [`CounterFlow`], [`ParallelFlow`], and the
//!   boundary-facing [`FlowArrangement`] token
//! - **The [`EffectivenessRelation`] seam** each arrangement implements
//!
//! Unlike a general exchanger library, streams here may carry a zero
//! capacitance rate: a stream with no flow (or undergoing phase change on
//! the `C_max` side) is a first-class input, and the calculator decides
//! what it means before any arrangement relation runs.

pub mod arrangement;
mod capacitance_rate;
mod capacity_ratio;
mod effectiveness_ntu;

pub use arrangement::{CounterFlow, FlowArrangement, ParallelFlow};
pub use capacitance_rate::CapacitanceRate;
pub use capacity_ratio::CapacityRatio;
pub use effectiveness_ntu::{Effectiveness, EffectivenessRelation, Ntu};
