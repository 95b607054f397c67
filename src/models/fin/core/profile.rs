//! Profile sampling along the fin axis.

/// Samples `count` evenly spaced positions over `[0, length]`, inclusive of
/// both endpoints. A single sample sits at the base.
pub(super) fn sample_positions(length: f64, count: usize) -> Vec<f64> {
    if count == 1 {
        return vec![0.0];
    }
    let last = (count - 1) as f64;
    (0..count).map(|i| length * (i as f64 / last)).collect()
}

/// Temperature at each sampled position.
///
/// `T(x) = T_inf + (T_base − T_inf) · cosh(m(L−x)) / cosh(mL)`, with the
/// uniform fallbacks for no driving difference and no spatial decay.
pub(super) fn temperatures(
    positions: &[f64],
    m: f64,
    length: f64,
    t_base: f64,
    t_inf: f64,
) -> Vec<f64> {
    if t_base == t_inf {
        return vec![t_inf; positions.len()];
    }
    if m == 0.0 || length == 0.0 {
        return vec![t_base; positions.len()];
    }
    let base_scale = (m * length).cosh();
    positions
        .iter()
        .map(|&x| t_inf + (t_base - t_inf) * ((m * (length - x)).cosh() / base_scale))
        .collect()
}
