//! Computation core for the effectiveness-NTU exchanger calculator.
//!
//! Edge cases are evaluated in a fixed precedence before any arrangement
//! relation runs:
//!
//! 1. Hot inlet below cold inlet: error, nothing computed.
//! 2. Equal inlet temperatures: proceed; every heat quantity resolves to
//!    zero.
//! 3. Both capacitance rates zero: error (no heat transfer possible).
//! 4. Exactly one rate zero: valid isothermal-stream case. NTU takes the
//!    `UA / C_min` limit (unbounded for a positive conductance), the
//!    effectiveness and heat rate are zero, and outlets equal inlets.
//! 5. Otherwise the arrangement's effectiveness relation applies.

mod error;
mod input;
mod results;

pub use error::ExchangerError;
pub use input::{ExchangerInputs, StreamInlet};
pub use results::ExchangerResults;

use uom::ConstZero;
use uom::si::f64::Power;

use crate::support::hx::{CapacityRatio, Effectiveness, EffectivenessRelation, Ntu};
use crate::support::units::TemperatureDifference;

/// Solves exchanger performance for validated inputs.
///
/// # Errors
///
/// Returns an [`ExchangerError`] for an inverted inlet pair or two
/// zero-capacitance streams. Every other input yields a result.
pub(crate) fn solve(inputs: &ExchangerInputs) -> Result<ExchangerResults, ExchangerError> {
    let t_hot_in = inputs.hot.temperature;
    let t_cold_in = inputs.cold.temperature;

    if t_hot_in < t_cold_in {
        return Err(ExchangerError::InletInversion {
            hot: t_hot_in,
            cold: t_cold_in,
        });
    }

    let c_hot = inputs.hot.capacitance_rate;
    let c_cold = inputs.cold.capacitance_rate;

    if c_hot.is_zero() && c_cold.is_zero() {
        return Err(ExchangerError::NoCapacitance);
    }

    let rates = [c_hot, c_cold];
    let ua = inputs.conductance.into_inner();
    let ntu = Ntu::from_conductance_and_capacitance_rates(ua, rates)
        .expect("conductance is non-negative by construction");

    if c_hot.is_zero() || c_cold.is_zero() {
        // One isothermal stream: C_min is zero, so q_max and the actual
        // heat rate are zero and both streams leave at their inlet state.
        return Ok(ExchangerResults {
            ntu,
            effectiveness: Effectiveness::zero(),
            heat_rate: Power::ZERO,
            hot_outlet: t_hot_in,
            cold_outlet: t_cold_in,
        });
    }

    let capacity_ratio = CapacityRatio::from_capacitance_rates(rates);
    let effectiveness = inputs.arrangement.effectiveness(ntu, capacity_ratio);

    let c_min = c_hot.min(*c_cold);
    let q_max = c_min * t_hot_in.minus(t_cold_in);
    let heat_rate = if t_hot_in == t_cold_in {
        // No driving difference; zero regardless of effectiveness.
        Power::ZERO
    } else {
        *effectiveness * q_max
    };

    Ok(ExchangerResults {
        ntu,
        effectiveness,
        heat_rate,
        hot_outlet: t_hot_in - heat_rate / *c_hot,
        cold_outlet: t_cold_in + heat_rate / *c_cold,
    })
}

#[cfg(test)]
pub(crate) fn test_inputs(
    c_hot: f64,
    t_hot: f64,
    c_cold: f64,
    t_cold: f64,
    ua: f64,
    arrangement: crate::support::hx::FlowArrangement,
) -> crate::support::constraint::ConstraintResult<ExchangerInputs> {
    use crate::support::constraint::NonNegative;
    use crate::support::hx::CapacitanceRate;
    use uom::si::{
        f64::{ThermalConductance, ThermodynamicTemperature},
        thermal_conductance::watt_per_kelvin,
        thermodynamic_temperature::kelvin,
    };

    Ok(ExchangerInputs {
        hot: StreamInlet::new(
            CapacitanceRate::new::<watt_per_kelvin>(c_hot)?,
            ThermodynamicTemperature::new::<kelvin>(t_hot),
        ),
        cold: StreamInlet::new(
            CapacitanceRate::new::<watt_per_kelvin>(c_cold)?,
            ThermodynamicTemperature::new::<kelvin>(t_cold),
        ),
        conductance: NonNegative::new(ThermalConductance::new::<watt_per_kelvin>(ua))?,
        arrangement,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use uom::si::{power::watt, ratio::ratio, thermodynamic_temperature::kelvin};

    use crate::support::constraint::ConstraintResult;
    use crate::support::hx::FlowArrangement;

    use super::*;

    #[test]
    fn inverted_inlets_are_rejected() -> ConstraintResult<()> {
        let inputs = test_inputs(
            1000.0,
            300.0,
            1000.0,
            350.0,
            500.0,
            FlowArrangement::Counterflow,
        )?;

        let error = solve(&inputs).unwrap_err();

        assert!(matches!(error, ExchangerError::InletInversion { .. }));
        assert_eq!(
            error.to_string(),
            "Hot fluid inlet temperature must be greater than cold fluid inlet temperature."
        );
        Ok(())
    }

    #[test]
    fn two_idle_streams_are_an_error() -> ConstraintResult<()> {
        let inputs = test_inputs(0.0, 400.0, 0.0, 300.0, 500.0, FlowArrangement::Parallel)?;

        let error = solve(&inputs).unwrap_err();

        assert!(matches!(error, ExchangerError::NoCapacitance));
        assert_eq!(
            error.to_string(),
            "Both hot and cold fluid flow rates are zero. No heat transfer possible."
        );
        Ok(())
    }

    #[test]
    fn one_idle_stream_is_valid_with_unbounded_ntu() -> ConstraintResult<()> {
        let inputs = test_inputs(0.0, 400.0, 1000.0, 300.0, 500.0, FlowArrangement::Parallel)?;

        let results = solve(&inputs).unwrap();

        assert!(results.ntu.get::<ratio>().is_infinite());
        assert_relative_eq!(results.effectiveness.get::<ratio>(), 0.0);
        assert_relative_eq!(results.heat_rate.get::<watt>(), 0.0);
        assert_relative_eq!(results.hot_outlet.get::<kelvin>(), 400.0);
        assert_relative_eq!(results.cold_outlet.get::<kelvin>(), 300.0);
        Ok(())
    }

    #[test]
    fn one_idle_stream_without_conductance_has_zero_ntu() -> ConstraintResult<()> {
        let inputs = test_inputs(1000.0, 400.0, 0.0, 300.0, 0.0, FlowArrangement::Counterflow)?;

        let results = solve(&inputs).unwrap();

        assert_relative_eq!(results.ntu.get::<ratio>(), 0.0);
        assert_relative_eq!(results.heat_rate.get::<watt>(), 0.0);
        Ok(())
    }

    #[test]
    fn equal_inlets_transfer_nothing() -> ConstraintResult<()> {
        let inputs = test_inputs(
            2000.0,
            350.0,
            1000.0,
            350.0,
            1000.0,
            FlowArrangement::Counterflow,
        )?;

        let results = solve(&inputs).unwrap();

        // The effectiveness is still well-defined; the heat rate is not
        // driven by it.
        assert!(results.effectiveness.get::<ratio>() > 0.0);
        assert_relative_eq!(results.heat_rate.get::<watt>(), 0.0);
        assert_relative_eq!(results.hot_outlet.get::<kelvin>(), 350.0);
        assert_relative_eq!(results.cold_outlet.get::<kelvin>(), 350.0);
        Ok(())
    }

    #[test]
    fn parallel_flow_reference_case() -> ConstraintResult<()> {
        let inputs = test_inputs(
            2000.0,
            400.0,
            1000.0,
            300.0,
            1000.0,
            FlowArrangement::Parallel,
        )?;

        let results = solve(&inputs).unwrap();

        // C_min = 1000, Cr = 0.5, NTU = 1.
        let expected_eff = (1.0 - (-1.5_f64).exp()) / 1.5;
        let expected_q = expected_eff * 1000.0 * 100.0;

        assert_relative_eq!(results.ntu.get::<ratio>(), 1.0);
        assert_relative_eq!(results.effectiveness.get::<ratio>(), expected_eff);
        assert_relative_eq!(results.heat_rate.get::<watt>(), expected_q);
        assert_relative_eq!(
            results.hot_outlet.get::<kelvin>(),
            400.0 - expected_q / 2000.0
        );
        assert_relative_eq!(
            results.cold_outlet.get::<kelvin>(),
            300.0 + expected_q / 1000.0
        );
        Ok(())
    }

    #[test]
    fn matched_counterflow_reference_case() -> ConstraintResult<()> {
        let inputs = test_inputs(
            1000.0,
            400.0,
            1000.0,
            300.0,
            2000.0,
            FlowArrangement::Counterflow,
        )?;

        let results = solve(&inputs).unwrap();

        // Cr = 1, NTU = 2: the limiting form gives 2/3.
        assert_relative_eq!(results.effectiveness.get::<ratio>(), 2.0 / 3.0);
        assert_relative_eq!(results.heat_rate.get::<watt>(), 2.0 / 3.0 * 100_000.0);
        Ok(())
    }

    proptest! {
        #[test]
        fn energy_balance_holds(
            c_hot in 1.0..10_000.0_f64,
            c_cold in 1.0..10_000.0_f64,
            t_hot in 300.0..500.0_f64,
            delta in 0.0..100.0_f64,
            ua in 0.0..50_000.0_f64,
            counterflow in proptest::bool::ANY,
        ) {
            let arrangement = if counterflow {
                FlowArrangement::Counterflow
            } else {
                FlowArrangement::Parallel
            };
            let inputs = test_inputs(c_hot, t_hot, c_cold, t_hot - delta, ua, arrangement)
                .unwrap();

            let results = solve(&inputs).unwrap();

            let hot_released = c_hot * (t_hot - results.hot_outlet.get::<kelvin>());
            let cold_absorbed =
                c_cold * (results.cold_outlet.get::<kelvin>() - (t_hot - delta));
            prop_assert!((hot_released - cold_absorbed).abs() <= 1e-6 * hot_released.abs().max(1.0));
        }
    }
}
