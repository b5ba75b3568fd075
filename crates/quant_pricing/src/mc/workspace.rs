//! Pre-allocated per-worker buffers for path simulation.
//!
//! This module provides [`PathWorkspace`], which holds every buffer a
//! single path needs so the simulation loop runs without heap allocation.
//! Each rayon worker owns one workspace for the duration of a pricing call.
//!
//! # Memory Layout
//!
//! - `normals`: n_fix × n_assets independent standard normals
//! - `path`, `mirror`: n_fix × n_assets prices (mirror holds the
//!   antithetic path)
//! - `correlated`: n_assets correlated shocks for the current fixing
//! - `pay_amounts`: one cash flow per payment time

/// Pre-allocated workspace for Monte Carlo simulation.
///
/// # Examples
///
/// ```rust
/// use quant_pricing::mc::PathWorkspace;
///
/// let mut workspace = PathWorkspace::new(12, 3, 1);
/// assert_eq!(workspace.normals_mut().len(), 36);
///
/// workspace.ensure_capacity(24, 3, 1);
/// assert_eq!(workspace.normals_mut().len(), 72);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PathWorkspace {
    normals: Vec<f64>,
    path: Vec<f64>,
    mirror: Vec<f64>,
    correlated: Vec<f64>,
    pay_amounts: Vec<f64>,
}

/// Mutable views of every buffer, borrowed together.
pub(crate) struct Buffers<'a> {
    pub normals: &'a mut [f64],
    pub path: &'a mut [f64],
    pub mirror: &'a mut [f64],
    pub correlated: &'a mut [f64],
    pub pay_amounts: &'a mut [f64],
}

impl PathWorkspace {
    /// Creates a workspace sized for `n_fix` fixings of `n_assets` assets
    /// and `n_pay` payments.
    pub fn new(n_fix: usize, n_assets: usize, n_pay: usize) -> Self {
        let mut ws = Self::default();
        ws.ensure_capacity(n_fix, n_assets, n_pay);
        ws
    }

    /// Resize every buffer to the given dimensions.
    ///
    /// Shrinking keeps the allocation; only growth allocates.
    pub fn ensure_capacity(&mut self, n_fix: usize, n_assets: usize, n_pay: usize) {
        let n = n_fix * n_assets;
        self.normals.resize(n, 0.0);
        self.path.resize(n, 0.0);
        self.mirror.resize(n, 0.0);
        self.correlated.resize(n_assets, 0.0);
        self.pay_amounts.resize(n_pay, 0.0);
    }

    /// Normal draws for the current path.
    #[inline]
    pub fn normals_mut(&mut self) -> &mut [f64] {
        &mut self.normals
    }

    /// Simulated prices of the last generated path.
    #[inline]
    pub fn path(&self) -> &[f64] {
        &self.path
    }

    /// Returns total memory used by all buffers in bytes.
    #[inline]
    pub fn memory_usage(&self) -> usize {
        (self.normals.capacity()
            + self.path.capacity()
            + self.mirror.capacity()
            + self.correlated.capacity()
            + self.pay_amounts.capacity())
            * std::mem::size_of::<f64>()
    }

    #[inline]
    pub(crate) fn buffers(&mut self) -> Buffers<'_> {
        Buffers {
            normals: &mut self.normals,
            path: &mut self.path,
            mirror: &mut self.mirror,
            correlated: &mut self.correlated,
            pay_amounts: &mut self.pay_amounts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let mut ws = PathWorkspace::new(4, 2, 1);
        {
            let b = ws.buffers();
            assert_eq!(b.normals.len(), 8);
            assert_eq!(b.path.len(), 8);
            assert_eq!(b.mirror.len(), 8);
            assert_eq!(b.correlated.len(), 2);
            assert_eq!(b.pay_amounts.len(), 1);
        }
        assert_eq!(ws.path().len(), 8);
    }

    #[test]
    fn test_shrink_keeps_allocation() {
        let mut ws = PathWorkspace::new(100, 5, 1);
        let before = ws.memory_usage();
        ws.ensure_capacity(10, 1, 1);
        assert_eq!(ws.memory_usage(), before);
        assert_eq!(ws.normals_mut().len(), 10);
    }
}
