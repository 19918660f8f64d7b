//! # enumars
//!
//! A functional pipeline library for Rust providing chainable sequence and
//! mapping wrappers and a placeholder expression builder.
//!
//! ## Overview
//!
//! This library brings an Elixir-`Enum`-flavored pipeline surface to Rust:
//!
//! - **Pipeline Containers**: [`Sequence`](pipeline::Sequence) and
//!   [`Mapping`](pipeline::Mapping), immutable wrappers with chainable
//!   transformation methods (map, filter, slice, chunk, aggregate)
//! - **Placeholder Expressions**: the [`ARG`](lambda::ARG) sentinel, whose
//!   arithmetic and comparison applications build a deferred expression tree
//!   instead of computing a value; the tree is later invoked like an
//!   ordinary single-argument function
//!
//! ## Feature Flags
//!
//! - `lambda`: Placeholder expression builder and evaluator
//! - `pipeline`: Pipeline containers (`Sequence`, `Mapping`)
//! - `serde`: `Serialize`/`Deserialize` support for values, expressions and
//!   containers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use enumars::prelude::*;
//!
//! let double_plus_one = ARG * 2 + 1;
//! assert_eq!(double_plus_one.apply(5).unwrap(), Value::Int(11));
//!
//! let over_100 = ARG.gt(100);
//! let kept = Sequence::from(vec![1, 150, 3, 200])
//!     .try_filter(|&element| over_100.test(element))
//!     .unwrap();
//! assert_eq!(kept, vec![150, 200]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use enumars::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "lambda")]
    pub use crate::lambda::*;

    #[cfg(feature = "pipeline")]
    pub use crate::pipeline::*;
}

#[cfg(feature = "lambda")]
pub mod lambda;

#[cfg(feature = "pipeline")]
pub mod pipeline;
