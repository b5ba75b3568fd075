//! Dense polynomials with coefficients in ascending powers.
//!
//! `[c0, c1, c2]` represents `c0 + c1·x + c2·x²`.

use num_traits::Float;

use crate::types::InterpolationError;

/// A polynomial with at least one coefficient.
///
/// # Example
///
/// ```
/// use quant_core::math::Polynomial;
///
/// // x² + 2x
/// let p = Polynomial::new(vec![0.0, 2.0, 1.0]).unwrap();
/// assert_eq!(p.evaluate(-2.0), 0.0);
/// assert_eq!(p.evaluate(1.0), 3.0);
///
/// // (1 + x)(1 - x) = 1 - x²
/// let a = Polynomial::new(vec![1.0, 1.0]).unwrap();
/// let b = Polynomial::new(vec![1.0, -1.0]).unwrap();
/// assert_eq!(a.product(&b).coefficients(), &[1.0, 0.0, -1.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<T: Float = f64> {
    coefficients: Vec<T>,
}

impl<T: Float> Polynomial<T> {
    /// Create a polynomial from ascending-power coefficients.
    ///
    /// # Errors
    ///
    /// `InterpolationError::InsufficientData` if `coefficients` is empty.
    pub fn new(coefficients: Vec<T>) -> Result<Self, InterpolationError> {
        if coefficients.is_empty() {
            return Err(InterpolationError::InsufficientData { got: 0, need: 1 });
        }
        Ok(Self { coefficients })
    }

    /// Coefficients in ascending powers.
    #[inline]
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Index of the highest stored coefficient.
    #[inline]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Evaluate with Horner's scheme.
    #[inline]
    pub fn evaluate(&self, x: T) -> T {
        self.coefficients
            .iter()
            .rev()
            .fold(T::zero(), |acc, &c| acc * x + c)
    }

    /// First derivative.
    pub fn derivative(&self) -> Self {
        if self.coefficients.len() == 1 {
            return Self {
                coefficients: vec![T::zero()],
            };
        }
        let mut power = T::zero();
        let coefficients = self
            .coefficients
            .iter()
            .skip(1)
            .map(|&c| {
                power = power + T::one();
                c * power
            })
            .collect();
        Self { coefficients }
    }

    /// Product of two polynomials, with trailing zero coefficients removed.
    ///
    /// At least one coefficient is always kept, so the zero polynomial is `[0]`.
    pub fn product(&self, other: &Self) -> Self {
        let n = self.coefficients.len() + other.coefficients.len() - 1;
        let mut coefficients = vec![T::zero(); n];
        for (i, &a) in self.coefficients.iter().enumerate() {
            for (j, &b) in other.coefficients.iter().enumerate() {
                coefficients[i + j] = coefficients[i + j] + a * b;
            }
        }
        while coefficients.len() > 1 && coefficients[coefficients.len() - 1] == T::zero() {
            coefficients.pop();
        }
        Self { coefficients }
    }
}
