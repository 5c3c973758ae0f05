//! # Newton-Cotes h2 Quadrature Module
//!
//! Estimates a definite integral with a 3-point Simpson-style Newton-Cotes
//! formula whose step size is chosen from the Simpson error bound
//! |E| <= (b - a) * h^4 * max|f''| / 12 (truncated at the h^2 term). The
//! integrand is symbolic: its second derivative is obtained analytically
//! through the symbolic engine and evaluated at the interval endpoints, the
//! larger magnitude serving as the curvature bound.
//!
//! The scheme is deliberately step-sized: the derived h replaces the
//! (b - a)/6 prefactor of textbook Simpson and the midpoint carries weight 2,
//! so the estimate depends on the interval width only through h.

use crate::symbolic::symbolic_engine::Expr;
use log::{debug, info};
use std::fmt;

/// Default tolerance of the step-size error bound.
pub const DEFAULT_TOLERANCE: f64 = 0.5e-2;

/// Error types for the quadrature routine
#[derive(Debug, Clone, PartialEq)]
pub enum QuadratureError {
    /// The second derivative vanishes at both endpoints (e.g. linear
    /// integrands), so the step-size formula would divide by zero.
    VanishingSecondDerivative,
    /// The integrand is not a function of exactly one variable.
    NotUnivariate(Vec<String>),
}

impl fmt::Display for QuadratureError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QuadratureError::VanishingSecondDerivative => {
                write!(
                    f,
                    "second derivative is zero at both endpoints, step size is undefined"
                )
            }
            QuadratureError::NotUnivariate(vars) => {
                write!(
                    f,
                    "integrand must depend on exactly one variable, found: {:?}",
                    vars
                )
            }
        }
    }
}

impl std::error::Error for QuadratureError {}

/// 3-point Simpson-style Newton-Cotes estimator with derived step size.
///
/// Holds the symbolic integrand and the integration interval; `integrate`
/// returns the pair (integral estimate, step size h). The computation is
/// pure: repeated calls with the same inputs return bit-identical results.
///
/// The interval is assumed ordered, a < b. Reversed bounds are unsupported:
/// they make the radicand of the step-size formula negative and the result
/// meaningless, and are not validated.
///
/// # Examples
/// ```rust, ignore
/// let f = Expr::parse_expression("x^2");
/// let solver = NewtonCotesH2::new(f, 0.0, 2.0);
/// let (integral, h) = solver.integrate().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct NewtonCotesH2 {
    /// symbolic integrand f(x)
    pub f: Expr,
    /// lower integration bound
    pub a: f64,
    /// upper integration bound
    pub b: f64,
    /// tolerance of the Simpson error bound used to derive h
    pub tolerance: f64,
}

impl NewtonCotesH2 {
    pub fn new(f: Expr, a: f64, b: f64) -> Self {
        Self {
            f,
            a,
            b,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    pub fn with_tolerance(f: Expr, a: f64, b: f64, tolerance: f64) -> Self {
        Self { f, a, b, tolerance }
    }

    /// Name of the single integration variable. Constant integrands fall back
    /// to "x"; they fail later with VanishingSecondDerivative anyway.
    fn variable_name(&self) -> Result<String, QuadratureError> {
        let vars = self.f.all_arguments_are_variables();
        match vars.len() {
            0 => Ok("x".to_string()),
            1 => Ok(vars[0].clone()),
            _ => Err(QuadratureError::NotUnivariate(vars)),
        }
    }

    /// Derives the step size h from the Simpson error bound.
    ///
    /// h = sqrt( (12 * tol * (b - a)) / max(|f''(a)|, |f''(b)|) )
    ///
    /// Non-negative whenever the curvature bound is positive and b > a.
    pub fn step_size(&self) -> Result<f64, QuadratureError> {
        let var = self.variable_name()?;
        let f_double_prime = self.f.n_th_derivative1D(&var, 2);
        debug!("f''({}) = {}", var, f_double_prime);

        let f_double_prime_fn = f_double_prime.lambdify1D();
        let f_double_prime_a = f_double_prime_fn(self.a).abs();
        let f_double_prime_b = f_double_prime_fn(self.b).abs();
        let max_f_double_prime = f_double_prime_a.max(f_double_prime_b);
        if max_f_double_prime == 0.0 {
            return Err(QuadratureError::VanishingSecondDerivative);
        }

        let h = ((12.0 * self.tolerance * (self.b - self.a)) / max_f_double_prime).sqrt();
        Ok(h)
    }

    /// Computes the integral estimate and the derived step size.
    ///
    /// Evaluates the integrand at the endpoints and the midpoint
    /// m = (a + b)/2 and sums them with weights 1, 1, 2 scaled by h/2.
    pub fn integrate(&self) -> Result<(f64, f64), QuadratureError> {
        let var = self.variable_name()?;

        let f_prime = self.f.diff(&var).simplify();
        debug!("f'({}) = {}", var, f_prime);

        let h = self.step_size()?;

        let m = (self.a + self.b) / 2.0;
        let f_fn = self.f.lambdify1D();
        let integral = (h / 2.0) * (f_fn(self.a) + f_fn(self.b) + 2.0 * f_fn(m));

        info!(
            "integral of {} over [{}, {}]: {} with step size h = {}",
            self.f, self.a, self.b, integral, h
        );
        Ok((integral, h))
    }
}

/// Convenience wrapper: estimate the integral of `f` over [a, b] with the
/// default tolerance, returning (integral estimate, step size h).
pub fn newton_cotes_h2(f: &Expr, a: f64, b: f64) -> Result<(f64, f64), QuadratureError> {
    NewtonCotesH2::new(f.clone(), a, b).integrate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_square_on_0_2() {
        // f'' = 2 everywhere, h = sqrt(0.06), integral = (h/2)*(0 + 4 + 2)
        let f = Expr::parse_expression("x^2");
        let (integral, h) = NewtonCotesH2::new(f, 0.0, 2.0).integrate().unwrap();
        assert_relative_eq!(h, 0.2449489742783178, epsilon = 1e-12);
        assert_relative_eq!(integral, 0.7348469228349534, epsilon = 1e-12);
    }

    #[test]
    fn test_square_rounds_to_four_decimals() {
        let f = Expr::parse_expression("x^2");
        let (integral, h) = newton_cotes_h2(&f, 0.0, 2.0).unwrap();
        assert_relative_eq!(h, 0.2449, epsilon = 1e-4);
        assert_relative_eq!(integral, 0.7348, epsilon = 1e-4);
    }

    #[test]
    fn test_linear_integrand_fails() {
        let f = Expr::parse_expression("x");
        let result = NewtonCotesH2::new(f, 0.0, 2.0).integrate();
        assert_eq!(result, Err(QuadratureError::VanishingSecondDerivative));
    }

    #[test]
    fn test_constant_integrand_fails() {
        let f = Expr::Const(3.0);
        let result = NewtonCotesH2::new(f, 0.0, 1.0).integrate();
        assert_eq!(result, Err(QuadratureError::VanishingSecondDerivative));
    }

    #[test]
    fn test_multivariate_integrand_fails() {
        let f = Expr::parse_expression("x*y");
        let result = NewtonCotesH2::new(f, 0.0, 1.0).integrate();
        assert!(matches!(result, Err(QuadratureError::NotUnivariate(_))));
    }

    #[test]
    fn test_step_size_non_negative() {
        // f'' = -sin(x): zero at the lower endpoint, the upper one bounds it
        let f = Expr::parse_expression("sin(x)");
        let h = NewtonCotesH2::new(f, 0.0, 1.0).step_size().unwrap();
        assert!(h > 0.0);
        assert!(h.is_finite());
    }

    #[test]
    fn test_deterministic() {
        let f = Expr::parse_expression("exp(x)");
        let solver = NewtonCotesH2::new(f, 0.0, 1.0);
        let first = solver.integrate().unwrap();
        let second = solver.integrate().unwrap();
        assert_eq!(first.0.to_bits(), second.0.to_bits());
        assert_eq!(first.1.to_bits(), second.1.to_bits());
    }

    #[test]
    fn test_custom_tolerance() {
        // quadrupling the tolerance doubles h, the weights scale with it
        let f = Expr::parse_expression("x^2");
        let (_, h_default) = NewtonCotesH2::new(f.clone(), 0.0, 2.0).integrate().unwrap();
        let (_, h_loose) = NewtonCotesH2::with_tolerance(f, 0.0, 2.0, 4.0 * DEFAULT_TOLERANCE)
            .integrate()
            .unwrap();
        assert_relative_eq!(h_loose, 2.0 * h_default, epsilon = 1e-12);
    }
}
