//! Pipeline containers.
//!
//! This module provides the two chainable containers:
//!
//! - [`Sequence`]: an ordered, list-like wrapper with Elixir-`Enum`-flavored
//!   transformation methods
//! - [`Mapping`]: an insertion-ordered association wrapper
//!
//! Every transformation returns a new container and leaves the receiver
//! untouched, so pipelines can branch from any intermediate result. The
//! containers accept any ordinary closure as a transformation or predicate —
//! including the fallible callables produced by the
//! [`lambda`](crate::lambda) placeholder expressions, which plug into
//! [`Sequence::try_map`] and [`Sequence::try_filter`] with no
//! special-casing.
//!
//! # Examples
//!
//! ```rust
//! use enumars::pipeline::Sequence;
//!
//! let totals = Sequence::from(vec![1, 2, 3, 4, 5])
//!     .filter(|element| element % 2 == 1)
//!     .map(|element| element * element);
//! assert_eq!(totals, vec![1, 9, 25]);
//! assert_eq!(totals.sum(), 35);
//! ```

mod mapping;
mod sequence;

pub use mapping::Mapping;
pub use sequence::{OutOfBoundsError, Sequence};
