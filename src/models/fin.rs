//! Rectangular fin performance with an adiabatic tip.
//!
//! A straight rectangular fin of length `L` conducts heat from its base
//! into a surrounding fluid. With an adiabatic tip, the temperature profile
//! along the fin and the total heat transfer rate have closed forms in the
//! fin parameter `m = sqrt(h·P / (k·Ac))`:
//!
//! - `T(x) = T_inf + (T_base − T_inf) · cosh(m(L−x)) / cosh(mL)`
//! - `q = sqrt(h·P·k·Ac) · (T_base − T_inf) · tanh(mL)`
//! - `η = q / (h·P·L·(T_base − T_inf))`
//!
//! Every input in the valid domain produces a numeric answer; degenerate
//! geometries resolve through documented fallbacks rather than errors, so
//! the model's error type is [`Infallible`].

pub(crate) mod core;

pub use self::core::{FinInputs, FinResults};

use std::convert::Infallible;

use twine_core::Model;

/// Rectangular fin calculator with an adiabatic tip.
#[derive(Debug, Clone, Copy, Default)]
pub struct RectangularFin;

impl Model for RectangularFin {
    type Input = FinInputs;
    type Output = FinResults;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self::core::solve(input))
    }
}
