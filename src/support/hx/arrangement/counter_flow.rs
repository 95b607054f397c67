//! Counter-flow effectiveness-NTU relationship.

use crate::support::hx::{
    CapacityRatio, Effectiveness, Ntu,
    effectiveness_ntu::{EffectivenessRelation, effectiveness_via},
};

/// Counter-flow heat exchanger arrangement.
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterFlow;

impl EffectivenessRelation for CounterFlow {
    fn effectiveness(&self, ntu: Ntu, capacity_ratio: CapacityRatio) -> Effectiveness {
        effectiveness_via(ntu, capacity_ratio, |ntu, cr| {
            if cr < 1. {
                let decay = (-ntu * (1. - cr)).exp();
                let denominator = 1. - cr * decay;
                if denominator == 0. {
                    // Limit of the general form: perfect exchange.
                    1.
                } else {
                    (1. - decay) / denominator
                }
            } else {
                // cr == 1; the general form is 0/0 here.
                ntu / (1. + ntu)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::support::constraint::ConstraintResult;
    use approx::assert_relative_eq;
    use uom::si::ratio::ratio;

    use super::*;

    #[test]
    fn matched_streams_use_the_limiting_form() -> ConstraintResult<()> {
        let ntu = Ntu::new(2.0)?;
        let eff = CounterFlow.effectiveness(ntu, CapacityRatio::new(1.0)?);

        assert_relative_eq!(eff.get::<ratio>(), 2.0 / 3.0);
        Ok(())
    }

    #[test]
    fn limiting_form_matches_general_formula_near_unity() -> ConstraintResult<()> {
        // As Cr -> 1 the general expression approaches NTU / (1 + NTU).
        let ntu = Ntu::new(1.5)?;
        let exact = CounterFlow.effectiveness(ntu, CapacityRatio::new(1.0)?);
        let near = CounterFlow.effectiveness(ntu, CapacityRatio::new(1.0 - 1e-9)?);

        assert_relative_eq!(
            near.get::<ratio>(),
            exact.get::<ratio>(),
            max_relative = 1e-6
        );
        Ok(())
    }

    #[test]
    fn zero_capacity_ratio_is_exponential() -> ConstraintResult<()> {
        let ntu = Ntu::new(1.0)?;
        let eff = CounterFlow.effectiveness(ntu, CapacityRatio::new(0.0)?);

        assert_relative_eq!(eff.get::<ratio>(), 1.0 - (-1.0_f64).exp());
        Ok(())
    }

    #[test]
    fn known_value() -> ConstraintResult<()> {
        // NTU = 2, Cr = 0.5.
        let ntu = Ntu::new(2.0)?;
        let eff = CounterFlow.effectiveness(ntu, CapacityRatio::new(0.5)?);

        let decay = (-2.0_f64 * 0.5).exp();
        let expected = (1.0 - decay) / (1.0 - 0.5 * decay);
        assert_relative_eq!(eff.get::<ratio>(), expected);
        Ok(())
    }
}
