//! Heat exchanger performance via the effectiveness-NTU method.
//!
//! Given the capacitance rates and inlet temperatures of a hot and a cold
//! stream, an overall conductance (UA), and a flow arrangement, the NTU
//! method yields the exchanger effectiveness, the actual heat rate, and
//! both outlet temperatures in closed form.
//!
//! Zero-capacitance streams are first-class inputs: one idle stream is the
//! physically valid isothermal case (for example, phase change on that
//! side), while two idle streams make heat transfer impossible and are
//! reported as an error. A hot inlet colder than the cold inlet is
//! rejected outright.

pub(crate) mod core;

pub use self::core::{ExchangerError, ExchangerInputs, ExchangerResults, StreamInlet};

use twine_core::Model;

/// Effectiveness-NTU heat exchanger calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct NtuExchanger;

impl Model for NtuExchanger {
    type Input = ExchangerInputs;
    type Output = ExchangerResults;
    type Error = ExchangerError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self::core::solve(input)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::{power::watt, ratio::ratio};

    use crate::support::constraint::ConstraintResult;
    use crate::support::hx::FlowArrangement;

    use super::core::test_inputs;
    use super::*;

    #[test]
    fn adapter_delegates_to_the_core() -> ConstraintResult<()> {
        let inputs = test_inputs(
            2000.0,
            400.0,
            1000.0,
            300.0,
            1000.0,
            FlowArrangement::Parallel,
        )?;

        let results = NtuExchanger.call(&inputs).unwrap();

        assert_relative_eq!(results.ntu.get::<ratio>(), 1.0);
        assert!(results.heat_rate.get::<watt>() > 0.0);
        Ok(())
    }
}
