use uom::si::f64::{Length, Power, Ratio, ThermodynamicTemperature};

/// Sampled profile and performance figures for a rectangular fin.
#[derive(Debug, Clone)]
pub struct FinResults {
    /// Sampled positions along the fin, from base (0) to tip (L).
    pub positions: Vec<Length>,

    /// Temperature at each sampled position, matching `positions` by index.
    pub temperatures: Vec<ThermodynamicTemperature>,

    /// Heat transfer rate from the fin into the surrounding fluid.
    pub heat_rate: Power,

    /// Fin efficiency.
    ///
    /// Positive values are capped at unity; a negative value (possible
    /// under inverted sign conventions) is reported unchanged.
    pub efficiency: Ratio,
}
