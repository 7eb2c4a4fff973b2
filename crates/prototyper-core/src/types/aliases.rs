//! Type aliases for commonly used shared-ownership types.
//!
//! The editor runs on a single UI thread, so shared mutable state is
//! `Rc<RefCell<T>>` rather than a lock.
//!
//! ## Usage
//!
//! ```rust
//! use prototyper_core::types::{shared, Shared};
//!
//! let counter: Shared<u32> = shared(0);
//! *counter.borrow_mut() += 1;
//! assert_eq!(*counter.borrow(), 1);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// Works with unsized trait objects too: a `Shared<Concrete>` coerces to
/// `Shared<dyn Trait>`, which is how collaborators are injected into commands.
pub type Shared<T> = Rc<RefCell<T>>;

/// Create a new `Shared<T>` from a value.
#[inline]
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
