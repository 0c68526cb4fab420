//! Collect - Generic in-memory collections and the operations over them.
//!
//! Collect provides a family of keyed containers and a library of
//! operations that work on all of them through a handful of capability
//! traits. It supports:
//!
//! - Lists, maps, strict maps, arbitrary-key maps, identity-keyed object maps
//!   and tables
//! - Search, membership, intersection, slicing, sorting, counting, chunking
//! - Type assertions over values: primitives, categories, classes
//! - Rule-based row filtering of tables with AND / OR / NOT composition
//!
//! # Quick Start
//!
//! ```rust
//! use standout_collect::{row, Associative, Indexed, Key, Matrix, Op, Operations, Sortable, Value};
//!
//! // Sequences are renumbered from zero
//! let names = Indexed::from(vec!["John", "Jane", "Jim"]);
//! assert_eq!(names.sort().asc().to_vec()[0], Value::from("Jane"));
//! assert_eq!(names.take().first(2).len(), 2);
//!
//! // Maps keep their keys
//! let person = Associative::new().with("firstname", "John").with("lastname", "Doe");
//! assert_eq!(person.find().key(&Value::from("Doe")), Some(Key::from("lastname")));
//!
//! // Tables are filtered with rules
//! let people = Matrix::from_iter([
//!     (1, row([("name", Value::from("John")), ("age", Value::from(21))])),
//!     (2, row([("name", Value::from("Jane")), ("age", Value::from(27))])),
//!     (3, row([("name", Value::from("Jim")), ("age", Value::from(14))])),
//! ]);
//! let adults = people
//!     .select()
//!     .where_(("age", Op::Gte, 18), [])?
//!     .result();
//! assert_eq!(adults.column("name")?.to_vec(), vec![Value::from("John"), Value::from("Jane")]);
//! # Ok::<(), standout_collect::CollectError>(())
//! ```
//!
//! # Containers
//!
//! | Container | Keys | Writable |
//! |-----------|------|----------|
//! | [`Indexed`] | `usize`, `0..n` when built | no (use `push`/`remove`) |
//! | [`Associative`] | [`Key`] | no |
//! | [`Arr`] | [`Key`] | yes, strict |
//! | [`Mix`] | any [`Value`], by canonical form | yes, strict |
//! | [`Obj`] | [`ObjRef`], by identity | yes, strict |
//! | [`Matrix`] | [`Key`], values are [`Row`]s | no |
//!
//! Strict mutation means `add` fails on an occupied key and `replace` and
//! `remove` fail on an absent one; `set` always succeeds.
//!
//! # Query Semantics
//!
//! A [`Select`] narrows a table step by step:
//!
//! ```text
//! where_(A, [B, C])   rows matching A ∨ B ∨ C
//! where_(A).where_(B) rows matching A ∧ B
//! where_not(A, [B])   rows matching ¬(A ∨ B)
//! ...or(C)            adds rows of the original table matching C
//! ```
//!
//! A rule naming a column some row lacks fails the whole step with
//! [`CollectError::MissingColumn`].

mod arr;
mod associative;
pub mod bulk;
mod error;
mod indexed;
mod matrix;
mod mix;
mod obj;
mod op;
mod ops;
mod ordering;
mod rowset;
mod rule;
mod select;
mod traits;
mod types;
mod value;

// Re-export public API
pub use arr::Arr;
pub use associative::Associative;
pub use error::{CollectError, Result};
pub use indexed::Indexed;
pub use matrix::{row, Matrix, Row};
pub use mix::Mix;
pub use obj::Obj;
pub use op::{compare, Comparison, Op};
pub use ops::{
    Chunk, Contains, CountBy, Ensure, Find, Intersect, Is, Operations, Skip, Sort, Take, When,
};
pub use ordering::{Dir, RegularOrd};
pub use rowset::Where;
pub use rule::Rule;
pub use select::Select;
pub use traits::{
    ArrayableStorage, AsKey, Chunkable, Entries, Filterable, Readable, Sortable, Step, Storage,
    Writable,
};
pub use types::{Category, Classify, Primitive, Type};
pub use value::{Key, Number, ObjRef, Object, Value};
