//! Predicate combinators for composable validation logic
//!
//! Field rules are built from small predicates that each answer one question about
//! a value. Combine them with `and` and `not`, or chain them on a
//! [`Validation`](crate::Validation) with `ensure` so only the first failing
//! constraint is reported.
//!
//! # Example
//!
//! ```rust
//! use contact_form::{Validation, predicate::*};
//!
//! let result = Validation::success(String::from("Jo"))
//!     .ensure(not_empty(), "First name is required.")
//!     .ensure(len_min(2), "Too Short!")
//!     .ensure(len_max(50), "Too Long!");
//! assert_eq!(result, Validation::success(String::from("Jo")));
//! ```

mod combinators;
mod string;
mod validation;
mod value;

pub use combinators::{And, Not, Predicate, PredicateExt};
pub use string::{is_email, len_max, len_min, not_empty, IsEmail, LenBetween, NotEmpty};
pub use validation::validate;
pub use value::{one_of, OneOf};
