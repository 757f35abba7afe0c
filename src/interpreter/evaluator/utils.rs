/// Largest integral operand whose factorial is finite in `f64`.
pub const MAX_FACTORIAL_OPERAND: f64 = 170.0;

/// Computes `n!` for a non-negative integral `n` by exact multiplication.
///
/// Every partial product up to `22!` is exactly representable, and beyond that
/// the result is the correctly rounded product. Operands above
/// [`MAX_FACTORIAL_OPERAND`] yield infinity.
///
/// # Example
/// ```
/// use fixity::interpreter::evaluator::utils::integral_factorial;
///
/// assert_eq!(integral_factorial(0), 1.0);
/// assert_eq!(integral_factorial(5), 120.0);
/// assert!(integral_factorial(171).is_infinite());
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn integral_factorial(n: u64) -> f64 {
    if n > 170 {
        return f64::INFINITY;
    }
    (2..=n).fold(1.0, |acc, k| acc * k as f64)
}

/// Computes the gamma function Γ(z) using the Lanczos approximation.
///
/// Uses the standard 9-term Lanczos coefficients (`g = 7`). For `z < 0.5` the
/// reflection formula `Γ(z) = π / (sin(πz) * Γ(1 − z))` is applied.
///
/// # Example
/// ```
/// use fixity::interpreter::evaluator::utils::euler_gamma;
///
/// // Γ(5) = 4! = 24
/// let g = euler_gamma(5.0);
/// assert!((g - 24.0).abs() < 1e-10);
///
/// // Γ(0.5) = √π
/// assert!((euler_gamma(0.5) - std::f64::consts::PI.sqrt()).abs() < 1e-12);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn euler_gamma(z: f64) -> f64 {
    // Lanczos coefficients, g = 7, n = 9.
    const COEFFS: [f64; 9] = [0.999_999_999_999_809_9,
                              676.520_368_121_885_1,
                              -1_259.139_216_722_402_8,
                              771.323_428_777_653_1,
                              -176.615_029_162_140_6,
                              12.507_343_278_686_905,
                              -0.138_571_095_265_720_12,
                              9.984_369_578_019_572e-6,
                              1.505_632_735_149_311_6e-7];
    const G: f64 = 7.0;

    if z < 0.5 {
        return std::f64::consts::PI / ((std::f64::consts::PI * z).sin() * euler_gamma(1.0 - z));
    }

    let z_minus_1 = z - 1.0;
    let mut x = COEFFS[0];
    for (i, &c) in COEFFS.iter().enumerate().skip(1) {
        x += c / (z_minus_1 + i as f64);
    }

    let t = z_minus_1 + G + 0.5;
    std::f64::consts::TAU.sqrt() * t.powf(z_minus_1 + 0.5) * (-t).exp() * x
}
