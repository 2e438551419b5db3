//! Shared mutable number arrays.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rpn_ir::format_number;

/// Longest array `valloc` will create (16M elements, 128 MiB).
pub const MAX_ARRAY_LEN: usize = 1 << 24;

/// A fixed-length array of numbers with reference semantics.
///
/// Cloning an `ArrayRef` clones the handle, not the contents: the
/// environment entry and every value read from it alias one buffer, so an
/// element written through one handle is visible through all of them.
///
/// Single-threaded (`Rc`, not `Arc`); evaluation never crosses threads.
#[derive(Clone)]
#[repr(transparent)]
pub struct ArrayRef(Rc<RefCell<Vec<f64>>>);

impl ArrayRef {
    /// Create an array of `len` zeros.
    pub fn zeroed(len: usize) -> Self {
        Self::from_vec(vec![0.0; len])
    }

    /// Create an array of `len` zeros, or `None` if the allocation fails.
    pub fn try_zeroed(len: usize) -> Option<Self> {
        let mut values = Vec::new();
        values.try_reserve_exact(len).ok()?;
        values.resize(len, 0.0);
        Some(Self::from_vec(values))
    }

    /// Wrap existing contents.
    pub fn from_vec(values: Vec<f64>) -> Self {
        ArrayRef(Rc::new(RefCell::new(values)))
    }

    /// Number of elements. Fixed for the array's lifetime.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Check if the array has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Element at `index`, if in bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.borrow().get(index).copied()
    }

    /// Overwrite the element at `index` in place.
    ///
    /// Returns `false` (and changes nothing) if `index` is out of bounds.
    pub fn set(&self, index: usize, value: f64) -> bool {
        match self.0.borrow_mut().get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Copy the current contents out.
    pub fn to_vec(&self) -> Vec<f64> {
        self.0.borrow().clone()
    }

    /// Whether two handles alias the same buffer.
    #[inline]
    pub fn ptr_eq(&self, other: &ArrayRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for ArrayRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0.borrow() == *other.0.borrow()
    }
}

impl fmt::Debug for ArrayRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ArrayRef").field(&*self.0.borrow()).finish()
    }
}

impl fmt::Display for ArrayRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, n) in self.0.borrow().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&format_number(*n))?;
        }
        f.write_str("]")
    }
}
