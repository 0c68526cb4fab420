//! Type tags and classification.
//!
//! [`Type`] names what a value is expected to be: a [`Primitive`] type, a
//! broader [`Category`], or a class/interface name checked against objects.
//! Containers stay agnostic of their value type; anything implementing
//! [`Classify`] can be checked by `Is`, `Ensure` and `Contains::of_type`.

use std::fmt;

use crate::error::Result;
use crate::matrix::Row;
use crate::value::{Number, Value};

/// Primitive runtime type of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Null,
    Bool,
    Int,
    Float,
    String,
    /// Lists and maps.
    Array,
    Object,
}

impl Primitive {
    pub fn as_str(self) -> &'static str {
        match self {
            Primitive::Null => "null",
            Primitive::Bool => "bool",
            Primitive::Int => "int",
            Primitive::Float => "float",
            Primitive::String => "string",
            Primitive::Array => "array",
            Primitive::Object => "object",
        }
    }
}

/// A group of primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Bool, int, float or string.
    Scalar,
    /// Int or float.
    Numeric,
    /// Arrays.
    Iterable,
}

impl Category {
    /// Returns `true` if `primitive` belongs to this category.
    pub fn contains(self, primitive: Primitive) -> bool {
        match self {
            Category::Scalar => matches!(
                primitive,
                Primitive::Bool | Primitive::Int | Primitive::Float | Primitive::String
            ),
            Category::Numeric => matches!(primitive, Primitive::Int | Primitive::Float),
            Category::Iterable => primitive == Primitive::Array,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Scalar => "scalar",
            Category::Numeric => "numeric",
            Category::Iterable => "iterable",
        }
    }
}

/// An expected type: primitive, category or class name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Primitive(Primitive),
    Category(Category),
    /// Class or interface name, matched with an instance check.
    Class(String),
}

impl Type {
    /// Shorthand for [`Type::Class`].
    pub fn class(name: impl Into<String>) -> Self {
        Type::Class(name.into())
    }

    /// Returns `true` if `value` is of this type.
    pub fn matches<V: Classify + ?Sized>(&self, value: &V) -> Result<bool> {
        match self {
            Type::Primitive(p) => Ok(value.classify()? == *p),
            Type::Category(c) => Ok(c.contains(value.classify()?)),
            Type::Class(name) => Ok(value.is_instance_of(name)),
        }
    }
}

impl From<Primitive> for Type {
    fn from(p: Primitive) -> Self {
        Type::Primitive(p)
    }
}

impl From<Category> for Type {
    fn from(c: Category) -> Self {
        Type::Category(c)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Primitive(p) => write!(f, "{}", p.as_str()),
            Type::Category(c) => write!(f, "{}", c.as_str()),
            Type::Class(name) => write!(f, "{name}"),
        }
    }
}

/// Runtime type classification.
pub trait Classify {
    /// Maps this value to its primitive type.
    ///
    /// Fails with [`TypeUnclassifiable`](crate::CollectError::TypeUnclassifiable) for values outside the
    /// known type system.
    fn classify(&self) -> Result<Primitive>;

    /// Returns `true` if this value is an object that is an instance of
    /// `class`.
    fn is_instance_of(&self, class: &str) -> bool;
}

impl Classify for Value {
    fn classify(&self) -> Result<Primitive> {
        Ok(match self {
            Value::Null => Primitive::Null,
            Value::Bool(_) => Primitive::Bool,
            Value::Number(Number::I64(_)) => Primitive::Int,
            Value::Number(Number::F64(_)) => Primitive::Float,
            Value::String(_) => Primitive::String,
            Value::List(_) | Value::Map(_) => Primitive::Array,
            Value::Object(_) => Primitive::Object,
        })
    }

    fn is_instance_of(&self, class: &str) -> bool {
        self.as_object().is_some_and(|o| o.is_instance_of(class))
    }
}

impl Classify for Row {
    fn classify(&self) -> Result<Primitive> {
        Ok(Primitive::Array)
    }

    fn is_instance_of(&self, _class: &str) -> bool {
        false
    }
}
