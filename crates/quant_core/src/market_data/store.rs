//! Named market object store.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::info;

use super::{MarketDataError, VolValueType, VolatilityTermStructure, YieldCurve, YieldValueType};

/// A market object resolved by name.
#[derive(Debug, Clone, PartialEq)]
pub enum MarketObject {
    /// A yield curve
    YieldCurve(Arc<YieldCurve>),
    /// A volatility term structure
    Volatility(Arc<VolatilityTermStructure>),
}

/// Sorted names of every stored object, per family.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketListing {
    /// Yield curve names
    pub yield_curves: Vec<String>,
    /// Volatility names
    pub volatilities: Vec<String>,
}

impl MarketListing {
    /// Total number of stored objects.
    pub fn len(&self) -> usize {
        self.yield_curves.len() + self.volatilities.len()
    }

    /// Whether the store held nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug)]
struct Entry<T> {
    object: Arc<T>,
    revision: u64,
}

#[derive(Debug, Default)]
struct Inner {
    yield_curves: HashMap<String, Entry<YieldCurve>>,
    volatilities: HashMap<String, Entry<VolatilityTermStructure>>,
}

/// Insert or replace, returning the new revision.
fn upsert<T>(map: &mut HashMap<String, Entry<T>>, name: &str, object: T) -> u64 {
    let revision = map.get(name).map_or(1, |e| e.revision + 1);
    map.insert(
        name.to_string(),
        Entry {
            object: Arc::new(object),
            revision,
        },
    );
    revision
}

fn sorted_keys<T>(map: &HashMap<String, Entry<T>>) -> Vec<String> {
    let mut names: Vec<String> = map.keys().cloned().collect();
    names.sort();
    names
}

/// Lower-cased, trimmed store key.
fn normalise(name: &str) -> Result<String, MarketDataError> {
    let key = name.trim().to_lowercase();
    if key.is_empty() {
        return Err(MarketDataError::EmptyName);
    }
    Ok(key)
}

/// Thread-safe store of yield curves and volatilities keyed by name.
///
/// Names are case-insensitive: every name is trimmed and lower-cased before
/// use, and the stored form is what `create_*` returns. Each family is
/// independent, so a yield curve and a volatility may share a name.
///
/// Creation validates and builds the object before the write lock is taken;
/// a rejected input leaves the store untouched. Readers receive `Arc`
/// handles, so objects stay valid after being replaced or cleared.
///
/// # Example
///
/// ```
/// use quant_core::market_data::{MarketStore, YieldValueType};
///
/// let store = MarketStore::new();
/// let name = store
///     .create_yield_curve("USD", &[1.0, 2.0], &[0.02, 0.03], YieldValueType::SpotRate)
///     .unwrap();
/// assert_eq!(name, "usd");
///
/// let curve = store.yield_curve("Usd").unwrap();
/// assert!((curve.spot_rate(1.0).unwrap() - 0.02).abs() < 1e-15);
///
/// store.clear();
/// assert!(store.yield_curve("usd").is_err());
/// ```
#[derive(Debug, Default)]
pub struct MarketStore {
    inner: RwLock<Inner>,
}

impl MarketStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Build and store a yield curve, replacing any curve with the same name.
    ///
    /// Returns the stored (lower-case) name.
    pub fn create_yield_curve(
        &self,
        name: &str,
        maturities: &[f64],
        values: &[f64],
        value_type: YieldValueType,
    ) -> Result<String, MarketDataError> {
        let curve = YieldCurve::new(maturities, values, value_type)?;
        self.insert_yield_curve(name, curve)
    }

    /// Store an already-built yield curve under `name`.
    pub fn insert_yield_curve(&self, name: &str, curve: YieldCurve) -> Result<String, MarketDataError> {
        let key = normalise(name)?;
        let revision = upsert(&mut self.write().yield_curves, &key, curve);
        info!(name = %key, revision, "stored yield curve");
        Ok(key)
    }

    /// Build and store a volatility term structure, replacing any with the same name.
    ///
    /// Returns the stored (lower-case) name.
    pub fn create_volatility(
        &self,
        name: &str,
        maturities: &[f64],
        values: &[f64],
        value_type: VolValueType,
    ) -> Result<String, MarketDataError> {
        let vol = VolatilityTermStructure::new(maturities, values, value_type)?;
        self.insert_volatility(name, vol)
    }

    /// Store an already-built volatility term structure under `name`.
    pub fn insert_volatility(
        &self,
        name: &str,
        vol: VolatilityTermStructure,
    ) -> Result<String, MarketDataError> {
        let key = normalise(name)?;
        let revision = upsert(&mut self.write().volatilities, &key, vol);
        info!(name = %key, revision, "stored volatility");
        Ok(key)
    }

    /// Yield curve stored under `name`.
    ///
    /// # Errors
    ///
    /// `MarketDataError::NotFound` if no yield curve has that name.
    pub fn yield_curve(&self, name: &str) -> Result<Arc<YieldCurve>, MarketDataError> {
        let key = normalise(name)?;
        self.read()
            .yield_curves
            .get(&key)
            .map(|e| Arc::clone(&e.object))
            .ok_or(MarketDataError::NotFound { name: key })
    }

    /// Volatility term structure stored under `name`.
    ///
    /// # Errors
    ///
    /// `MarketDataError::NotFound` if no volatility has that name.
    pub fn volatility(&self, name: &str) -> Result<Arc<VolatilityTermStructure>, MarketDataError> {
        let key = normalise(name)?;
        self.read()
            .volatilities
            .get(&key)
            .map(|e| Arc::clone(&e.object))
            .ok_or(MarketDataError::NotFound { name: key })
    }

    /// Object stored under `name`, yield curves searched first.
    pub fn get(&self, name: &str) -> Result<MarketObject, MarketDataError> {
        let key = normalise(name)?;
        let inner = self.read();
        if let Some(e) = inner.yield_curves.get(&key) {
            return Ok(MarketObject::YieldCurve(Arc::clone(&e.object)));
        }
        if let Some(e) = inner.volatilities.get(&key) {
            return Ok(MarketObject::Volatility(Arc::clone(&e.object)));
        }
        Err(MarketDataError::NotFound { name: key })
    }

    /// Number of writes to `name` since the last clear, per family.
    ///
    /// Returns `(yield_curve_revision, volatility_revision)`; zero means the
    /// name has not been written in that family.
    pub fn revision(&self, name: &str) -> Result<(u64, u64), MarketDataError> {
        let key = normalise(name)?;
        let inner = self.read();
        Ok((
            inner.yield_curves.get(&key).map_or(0, |e| e.revision),
            inner.volatilities.get(&key).map_or(0, |e| e.revision),
        ))
    }

    /// Sorted names of all stored objects.
    pub fn list(&self) -> MarketListing {
        let inner = self.read();
        MarketListing {
            yield_curves: sorted_keys(&inner.yield_curves),
            volatilities: sorted_keys(&inner.volatilities),
        }
    }

    /// Remove every object from both families.
    pub fn clear(&self) {
        let mut inner = self.write();
        let removed = inner.yield_curves.len() + inner.volatilities.len();
        inner.yield_curves.clear();
        inner.volatilities.clear();
        info!(removed, "cleared market store");
    }
}
