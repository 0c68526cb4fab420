//! Runtime value types held by containers.
//!
//! [`Value`] is the dynamic cell type every container stores. Map-like
//! containers key their entries with [`Key`]; objects are shared through
//! [`ObjRef`] handles whose equality is identity, not contents.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::rc::Rc;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// A dynamically typed value.
///
/// Equality is strict: `Value::from(1)` and `Value::from(1.0)` are different
/// values, and two objects are equal only when they are the same object.
/// Loose ordering lives in [`RegularOrd`](crate::RegularOrd).
///
/// # Example
///
/// ```
/// use standout_collect::Value;
///
/// let name = Value::from("Jane");
/// assert_eq!(name.as_str(), Some("Jane"));
/// assert!(Value::Null.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value {
    /// Absence of a value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer or floating point number.
    Number(Number),
    /// Owned string.
    String(String),
    /// Dense sequence of values.
    List(Vec<Value>),
    /// Ordered key/value mapping.
    Map(IndexMap<Key, Value>),
    /// Shared object handle.
    Object(ObjRef),
}

impl Value {
    /// Returns `true` if this is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extracts the object handle, if present.
    pub fn as_object(&self) -> Option<&ObjRef> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Reads this value as a number, accepting numeric strings.
    pub fn as_numeric(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            Value::String(s) => Number::parse(s),
            _ => None,
        }
    }

    /// Deterministic textual form used to compare keys of any type.
    ///
    /// The form is type-tagged JSON, so `1`, `1.0`, `"1"` and `true` all
    /// differ while structurally equal lists and maps coincide.
    pub fn canonical(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
            Value::Object(o) => write!(f, "{}", o.class()),
            Value::List(_) | Value::Map(_) => write!(f, "{}", self.canonical()),
        }
    }
}

/// Numeric value.
///
/// Comparisons between the two variants convert to `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64 for comparison.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers, handling mixed types.
    ///
    /// Returns `None` when either side is NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::F64(a), Number::F64(b)) => a.partial_cmp(&b),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }

    /// Parses a numeric string, integers first.
    pub fn parse(s: &str) -> Option<Number> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        if let Ok(n) = s.parse::<i64>() {
            return Some(Number::I64(n));
        }
        s.parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(Number::F64)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

// Non-finite floats have no JSON number form, so they serialize as tagged
// strings and keep distinct canonical forms.
impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Number::I64(n) => serializer.serialize_newtype_variant("Number", 0, "i64", &n),
            Number::F64(n) if n.is_finite() => {
                serializer.serialize_newtype_variant("Number", 1, "f64", &n)
            }
            Number::F64(n) => {
                let label = if n.is_nan() {
                    "NaN"
                } else if n > 0.0 {
                    "INF"
                } else {
                    "-INF"
                };
                serializer.serialize_newtype_variant("Number", 1, "f64", label)
            }
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{n}"),
            Number::F64(n) => write!(f, "{n}"),
        }
    }
}

macro_rules! number_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Number {
            fn from(n: $t) -> Self {
                Number::I64(n as i64)
            }
        }
    )*};
}

macro_rules! number_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Number {
            fn from(n: $t) -> Self {
                i64::try_from(n).map(Number::I64).unwrap_or(Number::F64(n as f64))
            }
        }
    )*};
}

number_from_signed!(i8, i16, i32, i64, isize);
number_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Number {
    fn from(n: f32) -> Self {
        Number::F64(n as f64)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::F64(n)
    }
}

/// Key of a map-like container: an integer or a string.
///
/// Keys order integers before strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Integer key.
    Int(i64),
    /// String key.
    Str(String),
}

impl Key {
    /// Converts any value into a key.
    ///
    /// Integers and strings map directly, booleans and floats become integers
    /// (floats truncate), `Null` becomes the empty string and anything else
    /// keys by its canonical form.
    pub fn from_value(value: &Value) -> Key {
        match value {
            Value::Number(Number::I64(n)) => Key::Int(*n),
            Value::Number(Number::F64(n)) => Key::Int(*n as i64),
            Value::String(s) => Key::Str(s.clone()),
            Value::Bool(b) => Key::Int(i64::from(*b)),
            Value::Null => Key::Str(String::new()),
            other => Key::Str(other.canonical()),
        }
    }

    /// Returns the integer key, if this is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(n) => Some(*n),
            Key::Str(_) => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(n) => write!(f, "{n}"),
            Key::Str(s) => write!(f, "{s}"),
        }
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Key::Int(n) => serializer.serialize_i64(*n),
            Key::Str(s) => serializer.serialize_str(s),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::Int(n)
    }
}

impl From<i32> for Key {
    fn from(n: i32) -> Self {
        Key::Int(n as i64)
    }
}

impl From<usize> for Key {
    fn from(n: usize) -> Self {
        Key::Int(n as i64)
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Int(n) => Value::Number(Number::I64(n)),
            Key::Str(s) => Value::String(s),
        }
    }
}

/// An object: a class name, the classes and interfaces it is an instance
/// of, and its properties.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Object {
    class: String,
    implements: Vec<String>,
    properties: IndexMap<String, Value>,
}

impl Object {
    /// Creates an object of the given class with no properties.
    pub fn new(class: impl Into<String>) -> Self {
        Object {
            class: class.into(),
            implements: Vec::new(),
            properties: IndexMap::new(),
        }
    }

    /// Declares a parent class or interface.
    pub fn implementing(mut self, name: impl Into<String>) -> Self {
        self.implements.push(name.into());
        self
    }

    /// Sets a property.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Returns the class name.
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Returns a property value.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Returns `true` if this object is an instance of `name`, either its
    /// own class or one it declares.
    pub fn is_instance_of(&self, name: &str) -> bool {
        self.class == name || self.implements.iter().any(|i| i == name)
    }
}

/// Shared handle to an [`Object`].
///
/// Equality and hashing use the identity of the allocation: two handles are
/// equal only when cloned from the same `ObjRef::new` call, even if the
/// objects they point to have identical contents.
///
/// ```
/// use standout_collect::{Object, ObjRef};
///
/// let a = ObjRef::new(Object::new("User").with("name", "Jane"));
/// let b = ObjRef::new(Object::new("User").with("name", "Jane"));
/// assert_eq!(a, a.clone());
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct ObjRef(Rc<Object>);

impl ObjRef {
    /// Allocates a new object with its own identity.
    pub fn new(object: Object) -> Self {
        ObjRef(Rc::new(object))
    }

    /// Address-derived identity of this object.
    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }
}

impl Deref for ObjRef {
    type Target = Object;

    fn deref(&self) -> &Object {
        &self.0
    }
}

impl PartialEq for ObjRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ObjRef {}

impl Hash for ObjRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Display for ObjRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{:x}", self.class(), self.id())
    }
}

impl Serialize for ObjRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl From<Object> for ObjRef {
    fn from(object: Object) -> Self {
        ObjRef::new(object)
    }
}

// Conversions into Value

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<ObjRef> for Value {
    fn from(o: ObjRef) -> Self {
        Value::Object(o)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<IndexMap<Key, Value>> for Value {
    fn from(map: IndexMap<Key, Value>) -> Self {
        Value::Map(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

macro_rules! value_from_number {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::Number(Number::from(n))
            }
        }
    )*};
}

value_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_extractors() {
        assert_eq!(Value::from("hello").as_str(), Some("hello"));
        assert_eq!(Value::from(42).as_number(), Some(Number::I64(42)));
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from("test").as_number(), None);
        assert_eq!(Value::from(1).as_str(), None);
    }

    #[test]
    fn numeric_strings() {
        assert_eq!(Value::from("12").as_numeric(), Some(Number::I64(12)));
        assert_eq!(Value::from(" 1.5").as_numeric(), Some(Number::F64(1.5)));
        assert_eq!(Value::from("abc").as_numeric(), None);
        assert_eq!(Value::from("").as_numeric(), None);
        assert_eq!(Value::from("inf").as_numeric(), None);
    }

    #[test]
    fn number_comparisons_mixed_types() {
        assert_eq!(Number::I64(5).compare(Number::F64(5.0)), Some(Ordering::Equal));
        assert_eq!(Number::I64(10).compare(Number::F64(5.5)), Some(Ordering::Greater));
        assert_eq!(Number::F64(f64::NAN).compare(Number::I64(1)), None);
    }

    #[test]
    fn large_unsigned_falls_back_to_float() {
        assert_eq!(Number::from(7u64), Number::I64(7));
        assert_eq!(Number::from(u64::MAX), Number::F64(u64::MAX as f64));
    }

    #[test]
    fn strict_equality() {
        assert_ne!(Value::from(1), Value::from(1.0));
        assert_ne!(Value::from(1), Value::from("1"));
        assert_eq!(Value::from(vec![1, 2]), Value::from(vec![1, 2]));
    }

    #[test]
    fn canonical_form_is_type_tagged() {
        let forms = [
            Value::from(1).canonical(),
            Value::from(1.0).canonical(),
            Value::from("1").canonical(),
            Value::from(true).canonical(),
        ];
        for (i, a) in forms.iter().enumerate() {
            for b in &forms[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(Value::from(vec![1, 2]).canonical(), Value::from(vec![1, 2]).canonical());
    }

    #[test]
    fn non_finite_floats_have_distinct_canonical_forms() {
        let nan = Value::from(f64::NAN).canonical();
        let inf = Value::from(f64::INFINITY).canonical();
        let neg = Value::from(f64::NEG_INFINITY).canonical();
        assert_eq!(nan, r#"{"type":"number","value":{"f64":"NaN"}}"#);
        assert_eq!(inf, r#"{"type":"number","value":{"f64":"INF"}}"#);
        assert_eq!(neg, r#"{"type":"number","value":{"f64":"-INF"}}"#);
        assert_eq!(nan, Value::from(-f64::NAN).canonical());
        assert_eq!(Value::from(1.5).canonical(), r#"{"type":"number","value":{"f64":1.5}}"#);
        assert_eq!(Value::from(2).canonical(), r#"{"type":"number","value":{"i64":2}}"#);
    }

    #[test]
    fn canonical_form_of_maps() {
        let mut map = IndexMap::new();
        map.insert(Key::from("a"), Value::from(1));
        map.insert(Key::from(2), Value::Null);
        let canonical = Value::Map(map).canonical();
        assert!(canonical.contains("\"a\""));
        assert!(canonical.contains("\"2\""));
    }

    #[test]
    fn key_from_value() {
        assert_eq!(Key::from_value(&Value::from(3)), Key::Int(3));
        assert_eq!(Key::from_value(&Value::from(3.9)), Key::Int(3));
        assert_eq!(Key::from_value(&Value::from("x")), Key::from("x"));
        assert_eq!(Key::from_value(&Value::from(true)), Key::Int(1));
        assert_eq!(Key::from_value(&Value::Null), Key::from(""));
    }

    #[test]
    fn object_identity() {
        let a = ObjRef::new(Object::new("User"));
        let b = ObjRef::new(Object::new("User"));
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_eq!(*a, *b);
    }

    #[test]
    fn object_instance_checks() {
        let user = Object::new("Admin").implementing("User").implementing("Countable");
        assert!(user.is_instance_of("Admin"));
        assert!(user.is_instance_of("Countable"));
        assert!(!user.is_instance_of("Post"));
    }

    #[test]
    fn display() {
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Key::from(10).to_string(), "10");
    }
}
