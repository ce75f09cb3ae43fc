//! Invalidatable cache cells
//!
//! A `CacheCell` memoizes one derived value behind an explicit validity flag.
//! It knows nothing about *why* it became stale: whoever mutates an input to
//! the cached computation calls `invalidate()`, and readers call `refresh()`
//! with a generator that recomputes the value on demand. Composing many small
//! cells with explicit triggers stays cheaper and more predictable than
//! automatic dependency tracking.

use std::cell::{Cell, RefCell};

use crate::error::{CoreError, Result};

/// A memoized value with caller-driven staleness marking.
///
/// Uses interior mutability so scene elements can hand out shared references
/// while still invalidating and refreshing. Starts invalid; the stored value
/// must not be observed until the first `refresh`.
///
/// # Example
///
/// ```rust
/// use shimmer_core::cache::CacheCell;
///
/// let bounds: CacheCell<f32> = CacheCell::new();
/// assert!(!bounds.is_valid());
///
/// let area = bounds.refresh(|| 12.0 * 8.0).unwrap();
/// assert_eq!(area, 96.0);
/// assert!(bounds.is_valid());
///
/// bounds.invalidate();
/// assert!(!bounds.is_valid());
/// ```
pub struct CacheCell<T> {
    value: RefCell<Option<T>>,
    valid: Cell<bool>,
    refreshing: Cell<bool>,
    violated: Cell<bool>,
}

impl<T: Clone> CacheCell<T> {
    /// Create an empty cell in the invalid state
    pub fn new() -> Self {
        Self {
            value: RefCell::new(None),
            valid: Cell::new(false),
            refreshing: Cell::new(false),
            violated: Cell::new(false),
        }
    }

    /// Create a cell pre-seeded with a valid value
    pub fn with_value(value: T) -> Self {
        Self {
            value: RefCell::new(Some(value)),
            valid: Cell::new(true),
            refreshing: Cell::new(false),
            violated: Cell::new(false),
        }
    }

    /// Query validity without side effects
    pub fn is_valid(&self) -> bool {
        self.valid.get()
    }

    /// Mark the cell stale. Idempotent; safe on an empty cell.
    ///
    /// Calling this from inside a `refresh` generator is a programming error:
    /// the generator would be invalidating its own output. The cell goes
    /// stale and the enclosing `refresh` reports the violation instead of
    /// storing the generator's result.
    pub fn invalidate(&self) {
        if self.refreshing.get() {
            tracing::error!("cache generator invalidated its own cell during refresh");
            self.violated.set(true);
        }
        self.valid.set(false);
    }

    /// Return the cached value, recomputing it if stale.
    ///
    /// When valid, returns the stored value without invoking the generator.
    /// When invalid, invokes the generator exactly once, stores its result,
    /// and marks the cell valid. A generator that touches its own cell
    /// fails with [`CoreError::ReentrancyViolation`], whether it reads back
    /// through `refresh` or calls `invalidate`; in the latter case the cell
    /// stays stale and the generator's result is discarded.
    pub fn refresh(&self, generator: impl FnOnce() -> T) -> Result<T> {
        if self.valid.get() {
            // Stored value is always present while valid
            if let Some(value) = self.value.borrow().as_ref() {
                return Ok(value.clone());
            }
        }
        if self.refreshing.get() {
            return Err(CoreError::ReentrancyViolation(
                "refresh called while a refresh of the same cell is running".into(),
            ));
        }

        self.refreshing.set(true);
        self.violated.set(false);
        let value = generator();
        self.refreshing.set(false);

        if self.violated.get() {
            self.violated.set(false);
            return Err(CoreError::ReentrancyViolation(
                "generator invalidated its own cell during refresh".into(),
            ));
        }

        *self.value.borrow_mut() = Some(value.clone());
        self.valid.set(true);
        Ok(value)
    }

    /// Peek at the stored value, `None` while the cell is stale
    pub fn get(&self) -> Option<T> {
        if self.valid.get() {
            self.value.borrow().clone()
        } else {
            None
        }
    }
}

impl<T: Clone> Default for CacheCell<T> {
    fn default() -> Self {
        Self::new()
    }
}
