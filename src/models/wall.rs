//! Composite-wall series conduction.
//!
//! A plane wall built from layers in series conducts heat according to the
//! total thermal resistance `R_total = Σ tᵢ / (kᵢ·Aᵢ)` and the surface
//! temperature difference: `q = (T_inner − T_outer) / R_total`.
//!
//! Degenerate walls are reported as typed errors rather than raised: an
//! empty layer list, or a zero total resistance facing a nonzero
//! temperature difference (which would imply infinite heat flux). The
//! error variants carry the per-layer resistances that remain meaningful.

pub(crate) mod core;

pub use self::core::{Layer, WallError, WallInputs, WallResults};

use twine_core::Model;

/// Composite plane-wall conduction calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompositeWall;

impl Model for CompositeWall {
    type Input = WallInputs;
    type Output = WallResults;
    type Error = WallError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self::core::solve(input)
    }
}

#[cfg(test)]
mod tests {
    use uom::si::power::watt;

    use crate::support::constraint::ConstraintResult;
    use crate::support::units::KelvinPerWatt;

    use super::core::{test_inputs, test_layer};
    use super::*;

    #[test]
    fn adapter_delegates_to_the_core() -> ConstraintResult<()> {
        let inputs = test_inputs(vec![test_layer(0.1, 1.0, 1.0)?], 373.0, 293.0);

        let results = CompositeWall.call(&inputs).unwrap();

        assert_eq!(results.total_resistance.get_kelvin_per_watt(), 0.1);
        assert_eq!(results.heat_rate.get::<watt>(), 800.0);
        Ok(())
    }
}
