//! Operations over containers.
//!
//! Each operation borrows one container and is otherwise stateless. They are
//! generic over the capability traits they need, so every container picks
//! up whichever operations its capabilities allow:
//!
//! | Operation | Needs | Returns |
//! |-----------|-------|---------|
//! | [`Find`] | `Readable` | single keys or values |
//! | [`Contains`] | `Readable` | `bool` |
//! | [`Is`] / [`Ensure`] | `Readable` | `bool` / the container |
//! | [`CountBy`] | `Readable` | counts |
//! | [`Intersect`] | `Filterable` | a new container |
//! | [`Skip`] / [`Take`] | `Filterable` | a new container |
//! | [`Sort`] | `ArrayableStorage + Filterable` | a new container |
//! | [`Chunk`] | `ArrayableStorage + Filterable` | new containers |
//! | [`When`] | anything | the container, by value |
//!
//! The [`Operations`] extension trait opens them as methods:
//!
//! ```
//! use standout_collect::{Associative, Key, Operations, Value};
//!
//! let person = Associative::from_iter([("firstname", "John"), ("lastname", "Doe")]);
//! assert_eq!(person.find().key(&Value::from("Doe")), Some(Key::from("lastname")));
//! assert!(person.contains().key(&Key::from("firstname")));
//! assert_eq!(person.take().first(1).keys(), vec![Key::from("firstname")]);
//! ```

mod chunk;
mod contains;
mod count_by;
mod find;
mod intersect;
mod is;
mod skip;
mod sort;
mod take;
mod when;

pub use chunk::Chunk;
pub use contains::Contains;
pub use count_by::CountBy;
pub use find::Find;
pub use intersect::Intersect;
pub use is::{Ensure, Is};
pub use skip::Skip;
pub use sort::Sort;
pub use take::Take;
pub use when::When;

use crate::traits::{Filterable, Readable};

/// Predicate state for [`Skip`] and [`Take`].
///
/// Once `Found`, the predicate is never consulted again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Toggle {
    Searching,
    Found,
}

/// Opens the operation layer on any [`Readable`] container.
pub trait Operations: Readable + Sized {
    fn find(&self) -> Find<'_, Self> {
        Find::new(self)
    }

    fn contains(&self) -> Contains<'_, Self> {
        Contains::new(self)
    }

    fn is(&self) -> Is<'_, Self> {
        Is::new(self)
    }

    fn ensure(&self) -> Ensure<'_, Self> {
        Ensure::new(self)
    }

    fn count_by(&self) -> CountBy<'_, Self> {
        CountBy::new(self)
    }

    fn intersect(&self) -> Intersect<'_, Self>
    where
        Self: Filterable,
    {
        Intersect::new(self)
    }

    fn skip(&self) -> Skip<'_, Self>
    where
        Self: Filterable,
    {
        Skip::new(self)
    }

    fn take(&self) -> Take<'_, Self>
    where
        Self: Filterable,
    {
        Take::new(self)
    }

    /// Moves the container into a [`When`].
    fn when(self) -> When<Self> {
        When::new(self)
    }
}

impl<C: Readable> Operations for C {}
