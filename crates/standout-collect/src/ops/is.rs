//! Type and emptiness checks.

use crate::error::{CollectError, Result};
use crate::traits::Readable;
use crate::types::{Classify, Type};

/// Boolean checks over a container.
///
/// ```
/// use standout_collect::{Category, Indexed, Operations, Primitive};
///
/// let numbers = Indexed::from(vec![1.5, 2.0]);
/// assert_eq!(numbers.is().all(Primitive::Float), Ok(true));
/// assert_eq!(numbers.is().any(Category::Iterable), Ok(false));
/// assert!(numbers.is().not_empty());
/// ```
pub struct Is<'a, C> {
    container: &'a C,
}

impl<'a, C> Is<'a, C> {
    pub fn new(container: &'a C) -> Self {
        Is { container }
    }
}

impl<C: Readable> Is<'_, C> {
    pub fn empty(&self) -> bool {
        self.container.iter().next().is_none()
    }

    pub fn not_empty(&self) -> bool {
        !self.empty()
    }

    /// Every value is of type `ty`. Holds for an empty container.
    pub fn all(&self, ty: impl Into<Type>) -> Result<bool>
    where
        C::Value: Classify,
    {
        let ty = ty.into();
        for (_, value) in self.container.iter() {
            if !ty.matches(value)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// At least one value is of type `ty`.
    pub fn any(&self, ty: impl Into<Type>) -> Result<bool>
    where
        C::Value: Classify,
    {
        let ty = ty.into();
        for (_, value) in self.container.iter() {
            if ty.matches(value)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// No value is of type `ty`.
    pub fn none(&self, ty: impl Into<Type>) -> Result<bool>
    where
        C::Value: Classify,
    {
        Ok(!self.any(ty)?)
    }
}

/// The asserting twin of [`Is`]: each check hands the container back when
/// it holds and fails with `EnsureFailed` when it does not.
pub struct Ensure<'a, C> {
    container: &'a C,
}

impl<'a, C> Ensure<'a, C> {
    pub fn new(container: &'a C) -> Self {
        Ensure { container }
    }
}

impl<'a, C: Readable> Ensure<'a, C> {
    pub fn empty(&self) -> Result<&'a C> {
        self.check(Is::new(self.container).empty(), || "empty".to_string())
    }

    pub fn not_empty(&self) -> Result<&'a C> {
        self.check(Is::new(self.container).not_empty(), || "not empty".to_string())
    }

    pub fn all(&self, ty: impl Into<Type>) -> Result<&'a C>
    where
        C::Value: Classify,
    {
        let ty = ty.into();
        let holds = Is::new(self.container).all(ty.clone())?;
        self.check(holds, || format!("all values are {ty}"))
    }

    pub fn any(&self, ty: impl Into<Type>) -> Result<&'a C>
    where
        C::Value: Classify,
    {
        let ty = ty.into();
        let holds = Is::new(self.container).any(ty.clone())?;
        self.check(holds, || format!("some value is {ty}"))
    }

    pub fn none(&self, ty: impl Into<Type>) -> Result<&'a C>
    where
        C::Value: Classify,
    {
        let ty = ty.into();
        let holds = Is::new(self.container).none(ty.clone())?;
        self.check(holds, || format!("no value is {ty}"))
    }

    fn check(&self, holds: bool, describe: impl FnOnce() -> String) -> Result<&'a C> {
        if holds {
            Ok(self.container)
        } else {
            Err(CollectError::EnsureFailed { check: describe() })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Primitive};
    use crate::{row, Associative, Indexed, Matrix, ObjRef, Object, Value};

    #[test]
    fn emptiness() {
        assert!(Is::new(&Indexed::new()).empty());
        assert!(Is::new(&Indexed::from(vec![0])).not_empty());
        assert!(Is::new(&Matrix::new()).empty());
    }

    #[test]
    fn type_checks() {
        let mixed = Associative::from_iter([("a", Value::from(1)), ("b", Value::from("x"))]);
        let is = Is::new(&mixed);
        assert_eq!(is.all(Category::Scalar), Ok(true));
        assert_eq!(is.all(Primitive::Int), Ok(false));
        assert_eq!(is.any(Primitive::String), Ok(true));
        assert_eq!(is.none(Primitive::Null), Ok(true));
    }

    #[test]
    fn empty_container_is_all_of_anything() {
        let empty = Indexed::new();
        assert_eq!(Is::new(&empty).all(Primitive::Bool), Ok(true));
        assert_eq!(Is::new(&empty).any(Primitive::Bool), Ok(false));
    }

    #[test]
    fn class_checks() {
        let point = ObjRef::new(Object::new("Point").implementing("Shape"));
        let list = Indexed::from(vec![Value::from(point)]);
        assert_eq!(Is::new(&list).all(Type::class("Shape")), Ok(true));
        assert_eq!(Is::new(&list).any(Type::class("Circle")), Ok(false));
    }

    #[test]
    fn rows_are_arrays() {
        let table = Matrix::from_iter([(1, row([("x", 1)]))]);
        assert_eq!(Is::new(&table).all(Primitive::Array), Ok(true));
    }

    #[test]
    fn ensure_returns_the_container() {
        let list = Indexed::from(vec![1, 2]);
        let checked = Ensure::new(&list).all(Primitive::Int).unwrap();
        assert_eq!(checked.len(), 2);
    }

    #[test]
    fn ensure_names_the_failed_check() {
        let list = Indexed::from(vec![1, 2]);
        assert_eq!(
            Ensure::new(&list).none(Category::Numeric).unwrap_err(),
            CollectError::EnsureFailed { check: "no value is numeric".into() }
        );
        assert_eq!(
            Ensure::new(&list).empty().unwrap_err().to_string(),
            "expectation failed: empty"
        );
    }
}
