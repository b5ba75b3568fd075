//! Root-finding algorithms.
//!
//! This module provides:
//! - [`bracket_roots`]: sign-change bracketing over a uniform subdivision
//! - [`SecantSolver`]: two-point secant refinement within a bracket
//! - [`SolverConfig`]: tolerance and iteration bound shared by solvers
//!
//! # Example
//!
//! ```
//! use quant_core::math::solvers::{bracket_roots, SecantSolver, SolverConfig};
//!
//! let f = |x: f64| x * x * x - x - 2.0;
//! let brackets = bracket_roots(f, 0.0, 3.0, 6).unwrap();
//! let solver = SecantSolver::new(SolverConfig::default());
//! let root = solver.find_root(f, brackets[0].0, brackets[0].1).unwrap();
//! assert!(f(root).abs() < 1e-10);
//! ```

mod bracket;
mod config;
mod secant;

pub use bracket::bracket_roots;
pub use config::SolverConfig;
pub use secant::SecantSolver;
