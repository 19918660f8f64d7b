//! Ordered-sequence pipeline container.
//!
//! [`Sequence`] is a lightweight, list-like wrapper with convenient
//! functional helpers inspired by the `Enum` module from the Elixir
//! programming language: mapping, filtering, slicing, chunking, grouping and
//! aggregation over an ordered buffer of elements.
//!
//! Every transformation borrows the receiver and returns a fresh
//! `Sequence`, so any intermediate pipeline stage can be reused or branched
//! from.
//!
//! # Examples
//!
//! ```rust
//! use enumars::pipeline::Sequence;
//!
//! let sequence = Sequence::from(vec![1, 2, 3, 4, 5]);
//!
//! assert_eq!(sequence.map(|x| x * x), vec![1, 4, 9, 16, 25]);
//! assert_eq!(sequence.filter(|x| x % 2 == 0), vec![2, 4]);
//! assert_eq!(sequence.take(2), vec![1, 2]);
//! assert_eq!(sequence.take(-2), vec![4, 5]);
//! assert_eq!(sequence.sum(), 15);
//!
//! // The original sequence is never consumed by a pipeline stage.
//! assert_eq!(sequence, vec![1, 2, 3, 4, 5]);
//! ```

use std::fmt;

use super::mapping::Mapping;

// =============================================================================
// Errors
// =============================================================================

/// An error returned by [`Sequence::fetch`] for an out-of-range index.
///
/// # Examples
///
/// ```rust
/// use enumars::pipeline::Sequence;
///
/// let error = Sequence::from(vec![1, 2, 3]).fetch(9).unwrap_err();
/// assert_eq!(
///     error.to_string(),
///     "index 9 out of bounds for sequence of length 3"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBoundsError {
    /// The index that was requested.
    pub index: usize,
    /// The length of the sequence at the time of the request.
    pub len: usize,
}

impl fmt::Display for OutOfBoundsError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "index {} out of bounds for sequence of length {}",
            self.index, self.len
        )
    }
}

impl std::error::Error for OutOfBoundsError {}

// =============================================================================
// Sequence Definition
// =============================================================================

/// An ordered, list-like collection with chainable functional helpers.
///
/// `Sequence<T>` wraps a `Vec<T>` and provides methods for mapping,
/// filtering, slicing and other common enumeration operations. Methods never
/// mutate the receiver; each transformation produces a new `Sequence`.
///
/// Transformation and predicate arguments are ordinary closures over `&T` —
/// any unary callable works, including the fallible callables built from
/// placeholder expressions (see [`Sequence::try_filter`]).
///
/// # Examples
///
/// ```rust
/// use enumars::pipeline::Sequence;
///
/// let words = Sequence::from(vec!["alpha", "beta", "gamma"]);
/// assert_eq!(words.join(", "), "alpha, beta, gamma");
/// assert_eq!(words.filter(|word| word.len() > 4), vec!["alpha", "gamma"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sequence<T> {
    elements: Vec<T>,
}

impl<T> Default for Sequence<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence<T> {
    // =========================================================================
    // Construction and Introspection
    // =========================================================================

    /// Creates an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Sequence;
    ///
    /// let sequence: Sequence<i32> = Sequence::new();
    /// assert!(sequence.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns the element at `index`, or `None` if out of range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Sequence;
    ///
    /// let sequence = Sequence::from(vec![10, 20, 30]);
    /// assert_eq!(sequence.at(1), Some(&20));
    /// assert_eq!(sequence.at(9), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns the element at `index`, or an [`OutOfBoundsError`].
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBoundsError`] when `index >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Sequence;
    ///
    /// let sequence = Sequence::from(vec![10, 20, 30]);
    /// assert_eq!(sequence.fetch(0), Ok(&10));
    /// assert!(sequence.fetch(3).is_err());
    /// ```
    pub fn fetch(&self, index: usize) -> Result<&T, OutOfBoundsError> {
        self.elements.get(index).ok_or(OutOfBoundsError {
            index,
            len: self.elements.len(),
        })
    }

    /// Returns `true` if `element` is present in the sequence.
    #[inline]
    pub fn member(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.elements.contains(element)
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// Vacuously `true` for an empty sequence.
    pub fn all(&self, predicate: impl Fn(&T) -> bool) -> bool {
        self.elements.iter().all(predicate)
    }

    /// Returns `true` if any element satisfies `predicate`.
    pub fn any(&self, predicate: impl Fn(&T) -> bool) -> bool {
        self.elements.iter().any(predicate)
    }

    // =========================================================================
    // Mapping and Filtering
    // =========================================================================

    /// Returns a new sequence of `transform(x)` for each element `x`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Sequence;
    ///
    /// let squares = Sequence::from(vec![1, 2, 3]).map(|x| x * x);
    /// assert_eq!(squares, vec![1, 4, 9]);
    /// ```
    pub fn map<G>(&self, transform: impl Fn(&T) -> G) -> Sequence<G> {
        self.elements.iter().map(transform).collect()
    }

    /// Invokes `procedure` for each element, in order.
    pub fn each(&self, mut procedure: impl FnMut(&T)) {
        for element in &self.elements {
            procedure(element);
        }
    }

    /// Returns a new sequence keeping only elements satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Sequence;
    ///
    /// let even = Sequence::from(vec![1, 2, 3, 4]).filter(|x| x % 2 == 0);
    /// assert_eq!(even, vec![2, 4]);
    /// ```
    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Self
    where
        T: Clone,
    {
        self.elements
            .iter()
            .filter(|element| predicate(element))
            .cloned()
            .collect()
    }

    /// Returns a new sequence excluding elements satisfying `predicate`.
    pub fn reject(&self, predicate: impl Fn(&T) -> bool) -> Self
    where
        T: Clone,
    {
        self.filter(|element| !predicate(element))
    }

    /// Maps each element and keeps only the `Some` results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Sequence;
    ///
    /// let parsed = Sequence::from(vec!["1", "two", "3"])
    ///     .filter_map(|text| text.parse::<i32>().ok());
    /// assert_eq!(parsed, vec![1, 3]);
    /// ```
    pub fn filter_map<G>(&self, transform: impl Fn(&T) -> Option<G>) -> Sequence<G> {
        self.elements.iter().filter_map(transform).collect()
    }

    /// Maps each element through a fallible transform, stopping at the first
    /// error.
    ///
    /// This is the natural entry point for the fallible callables built from
    /// placeholder expressions.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `transform`; no partial sequence
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::prelude::*;
    ///
    /// let double_plus_one = ARG * 2 + 1;
    /// let transformed = Sequence::from(vec![1, 2, 3])
    ///     .try_map(|&x| double_plus_one.apply(x))
    ///     .unwrap();
    /// assert_eq!(
    ///     transformed,
    ///     vec![Value::Int(3), Value::Int(5), Value::Int(7)]
    /// );
    /// ```
    pub fn try_map<G, E>(
        &self,
        transform: impl Fn(&T) -> Result<G, E>,
    ) -> Result<Sequence<G>, E> {
        self.elements.iter().map(transform).collect()
    }

    /// Filters through a fallible predicate, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `predicate`; no partial sequence
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::prelude::*;
    ///
    /// let over_100 = ARG.gt(100);
    /// let kept = Sequence::from(vec![1, 150, 3, 200])
    ///     .try_filter(|&x| over_100.test(x))
    ///     .unwrap();
    /// assert_eq!(kept, vec![150, 200]);
    /// ```
    pub fn try_filter<E>(&self, predicate: impl Fn(&T) -> Result<bool, E>) -> Result<Self, E>
    where
        T: Clone,
    {
        let mut kept = Vec::new();
        for element in &self.elements {
            if predicate(element)? {
                kept.push(element.clone());
            }
        }
        Ok(Self { elements: kept })
    }

    /// Maps each element to a string and joins them with `joiner`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Sequence;
    ///
    /// let rendered = Sequence::from(vec![1, 2, 3]).map_join(|x| x.to_string(), "-");
    /// assert_eq!(rendered, "1-2-3");
    /// ```
    pub fn map_join(&self, transform: impl Fn(&T) -> String, joiner: &str) -> String {
        self.elements
            .iter()
            .map(transform)
            .collect::<Vec<_>>()
            .join(joiner)
    }

    /// Concatenates the elements' `Display` renderings with `joiner`.
    pub fn join(&self, joiner: &str) -> String
    where
        T: fmt::Display,
    {
        self.map_join(ToString::to_string, joiner)
    }

    // =========================================================================
    // Aggregation
    // =========================================================================

    /// Reduces the sequence to a single value, folding left with `function`
    /// from the initial `accumulator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Sequence;
    ///
    /// let total = Sequence::from(vec![1, 2, 3]).reduce(10, |acc, x| acc + x);
    /// assert_eq!(total, 16);
    /// ```
    pub fn reduce<G>(&self, accumulator: G, function: impl Fn(G, &T) -> G) -> G {
        self.elements.iter().fold(accumulator, function)
    }

    /// Returns the sum of the elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Sequence;
    ///
    /// assert_eq!(Sequence::from(vec![1, 2, 3]).sum(), 6);
    /// assert_eq!(Sequence::<i32>::new().sum(), 0);
    /// ```
    pub fn sum(&self) -> T
    where
        T: Clone + std::iter::Sum<T>,
    {
        self.elements.iter().cloned().sum()
    }

    /// Returns the sum of the elements, mapping each element first.
    pub fn sum_by<N: std::iter::Sum<N>>(&self, mapper: impl Fn(&T) -> N) -> N {
        self.elements.iter().map(mapper).sum()
    }

    /// Returns the product of the elements.
    pub fn product(&self) -> T
    where
        T: Clone + std::iter::Product<T>,
    {
        self.elements.iter().cloned().product()
    }

    /// Returns the product of the elements, mapping each element first.
    pub fn product_by<N: std::iter::Product<N>>(&self, mapper: impl Fn(&T) -> N) -> N {
        self.elements.iter().map(mapper).product()
    }

    /// Returns the minimal element, or `None` when the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Sequence;
    ///
    /// assert_eq!(Sequence::from(vec![3, 1, 2]).min(), Some(&1));
    /// assert_eq!(Sequence::<i32>::new().min(), None);
    /// ```
    #[must_use]
    pub fn min(&self) -> Option<&T>
    where
        T: Ord,
    {
        self.elements.iter().min()
    }

    /// Returns the maximal element, or `None` when the sequence is empty.
    #[must_use]
    pub fn max(&self) -> Option<&T>
    where
        T: Ord,
    {
        self.elements.iter().max()
    }

    /// Returns both minimum and maximum, or `None` when the sequence is
    /// empty.
    #[must_use]
    pub fn min_max(&self) -> Option<(&T, &T)>
    where
        T: Ord,
    {
        Some((self.min()?, self.max()?))
    }

    /// Returns the minimal element as ordered by `key`, or `None` when
    /// empty.
    pub fn min_by<K: Ord>(&self, key: impl Fn(&T) -> K) -> Option<&T> {
        self.elements.iter().min_by_key(|element| key(element))
    }

    /// Returns the maximal element as ordered by `key`, or `None` when
    /// empty.
    pub fn max_by<K: Ord>(&self, key: impl Fn(&T) -> K) -> Option<&T> {
        self.elements.iter().max_by_key(|element| key(element))
    }

    /// Returns both minimum and maximum as ordered by `key`, or `None` when
    /// empty.
    pub fn min_max_by<K: Ord>(&self, key: impl Fn(&T) -> K) -> Option<(&T, &T)> {
        Some((self.min_by(&key)?, self.max_by(&key)?))
    }

    /// Returns a mapping from each distinct element to its occurrence count,
    /// in first-occurrence order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Sequence;
    ///
    /// let counts = Sequence::from(vec!["a", "b", "a"]).frequencies();
    /// assert_eq!(counts.get(&"a"), Some(&2));
    /// assert_eq!(counts.get(&"b"), Some(&1));
    /// ```
    pub fn frequencies(&self) -> Mapping<T, usize>
    where
        T: Clone + PartialEq,
    {
        let mut counts: Vec<(T, usize)> = Vec::new();
        for element in &self.elements {
            match counts.iter_mut().find(|(seen, _)| seen == element) {
                Some((_, count)) => *count += 1,
                None => counts.push((element.clone(), 1)),
            }
        }
        Mapping::from(counts)
    }

    /// Groups elements by the result of `key`, preserving element order
    /// within each group and first-occurrence order across groups.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Sequence;
    ///
    /// let by_parity = Sequence::from(vec![1, 2, 3, 4]).group_by(|x| x % 2);
    /// assert_eq!(by_parity.get(&1).unwrap(), &Sequence::from(vec![1, 3]));
    /// assert_eq!(by_parity.get(&0).unwrap(), &Sequence::from(vec![2, 4]));
    /// ```
    pub fn group_by<K: PartialEq>(&self, key: impl Fn(&T) -> K) -> Mapping<K, Self>
    where
        T: Clone,
    {
        let mut groups: Vec<(K, Self)> = Vec::new();
        for element in &self.elements {
            let group_key = key(element);
            match groups.iter_mut().find(|(seen, _)| *seen == group_key) {
                Some((_, group)) => group.elements.push(element.clone()),
                None => groups.push((group_key, Self::from(vec![element.clone()]))),
            }
        }
        Mapping::from(groups)
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Returns the first element satisfying `predicate`.
    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<&T> {
        self.elements.iter().find(|element| predicate(element))
    }

    /// Returns the index of the first element satisfying `predicate`.
    pub fn find_index(&self, predicate: impl Fn(&T) -> bool) -> Option<usize> {
        self.elements.iter().position(|element| predicate(element))
    }

    /// Returns the first `Some` result of `transform`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Sequence;
    ///
    /// let first_parsed = Sequence::from(vec!["x", "7", "9"])
    ///     .find_value(|text| text.parse::<i32>().ok());
    /// assert_eq!(first_parsed, Some(7));
    /// ```
    pub fn find_value<G>(&self, transform: impl Fn(&T) -> Option<G>) -> Option<G> {
        self.elements.iter().find_map(transform)
    }

    // =========================================================================
    // Slicing and Chunking
    // =========================================================================

    /// Returns the first `amount` elements; a negative `amount` takes from
    /// the tail instead. Saturates at the sequence bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Sequence;
    ///
    /// let sequence = Sequence::from(vec![1, 2, 3, 4, 5]);
    /// assert_eq!(sequence.take(2), vec![1, 2]);
    /// assert_eq!(sequence.take(-2), vec![4, 5]);
    /// assert_eq!(sequence.take(0), Sequence::new());
    /// assert_eq!(sequence.take(99), sequence);
    /// ```
    #[must_use]
    pub fn take(&self, amount: isize) -> Self
    where
        T: Clone,
    {
        let len = self.elements.len();
        let count = usize::min(amount.unsigned_abs(), len);
        if amount >= 0 {
            Self::from(self.elements[..count].to_vec())
        } else {
            Self::from(self.elements[len - count..].to_vec())
        }
    }

    /// Removes the first `amount` elements; a negative `amount` drops from
    /// the tail instead. Saturates at the sequence bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Sequence;
    ///
    /// let sequence = Sequence::from(vec![1, 2, 3, 4, 5]);
    /// assert_eq!(sequence.drop(2), vec![3, 4, 5]);
    /// assert_eq!(sequence.drop(-2), vec![1, 2, 3]);
    /// assert_eq!(sequence.drop(0), sequence);
    /// ```
    #[must_use]
    pub fn drop(&self, amount: isize) -> Self
    where
        T: Clone,
    {
        let len = self.elements.len();
        let count = usize::min(amount.unsigned_abs(), len);
        if amount >= 0 {
            Self::from(self.elements[count..].to_vec())
        } else {
            Self::from(self.elements[..len - count].to_vec())
        }
    }

    /// Returns every `nth` element, starting from the first; `nth == 0`
    /// returns an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Sequence;
    ///
    /// let sequence = Sequence::from(vec![1, 2, 3, 4, 5]);
    /// assert_eq!(sequence.take_every(2), vec![1, 3, 5]);
    /// assert_eq!(sequence.take_every(0), Sequence::new());
    /// ```
    #[must_use]
    pub fn take_every(&self, nth: usize) -> Self
    where
        T: Clone,
    {
        if nth == 0 {
            return Self::new();
        }
        self.elements.iter().step_by(nth).cloned().collect()
    }

    /// Returns the leading elements satisfying `predicate`.
    pub fn take_while(&self, predicate: impl Fn(&T) -> bool) -> Self
    where
        T: Clone,
    {
        self.elements
            .iter()
            .take_while(|element| predicate(element))
            .cloned()
            .collect()
    }

    /// Splits into the first `count` elements and the rest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Sequence;
    ///
    /// let (head, tail) = Sequence::from(vec![1, 2, 3, 4]).split(1);
    /// assert_eq!(head, vec![1]);
    /// assert_eq!(tail, vec![2, 3, 4]);
    /// ```
    #[must_use]
    pub fn split(&self, count: usize) -> (Self, Self)
    where
        T: Clone,
    {
        let boundary = usize::min(count, self.elements.len());
        (
            Self::from(self.elements[..boundary].to_vec()),
            Self::from(self.elements[boundary..].to_vec()),
        )
    }

    /// Splits at the first element failing `predicate`: the leading matching
    /// run, then everything from the first failure onwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Sequence;
    ///
    /// let (matching, rest) = Sequence::from(vec![1, 2, 9, 1]).split_while(|x| *x < 5);
    /// assert_eq!(matching, vec![1, 2]);
    /// assert_eq!(rest, vec![9, 1]);
    /// ```
    pub fn split_while(&self, predicate: impl Fn(&T) -> bool) -> (Self, Self)
    where
        T: Clone,
    {
        let boundary = self
            .find_index(|element| !predicate(element))
            .unwrap_or(self.elements.len());
        self.split(boundary)
    }

    /// Partitions into elements satisfying `predicate` and the rest,
    /// preserving order within both halves.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Sequence;
    ///
    /// let (even, odd) = Sequence::from(vec![1, 2, 3, 4]).split_with(|x| x % 2 == 0);
    /// assert_eq!(even, vec![2, 4]);
    /// assert_eq!(odd, vec![1, 3]);
    /// ```
    pub fn split_with(&self, predicate: impl Fn(&T) -> bool) -> (Self, Self)
    where
        T: Clone,
    {
        let (truthy, falsy): (Vec<T>, Vec<T>) = self
            .elements
            .iter()
            .cloned()
            .partition(|element| predicate(element));
        (Self::from(truthy), Self::from(falsy))
    }

    /// Splits the sequence into chunks of `count` elements; the final chunk
    /// holds whatever remains. `count == 0` yields an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Sequence;
    ///
    /// let chunked = Sequence::from(vec![1, 2, 3, 4, 5]).chunk_every(3);
    /// assert_eq!(chunked.len(), 2);
    /// assert_eq!(chunked.at(0).unwrap(), &Sequence::from(vec![1, 2, 3]));
    /// assert_eq!(chunked.at(1).unwrap(), &Sequence::from(vec![4, 5]));
    /// ```
    #[must_use]
    pub fn chunk_every(&self, count: usize) -> Sequence<Self>
    where
        T: Clone,
    {
        self.chunk_every_step(count, count)
    }

    /// Splits into chunks of `count` elements, advancing by `step` between
    /// chunk starts (overlapping chunks when `step < count`). A zero `count`
    /// or `step` yields an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Sequence;
    ///
    /// let windows = Sequence::from(vec![1, 2, 3, 4]).chunk_every_step(2, 1);
    /// assert_eq!(windows.len(), 3);
    /// assert_eq!(windows.at(0).unwrap(), &Sequence::from(vec![1, 2]));
    /// assert_eq!(windows.at(2).unwrap(), &Sequence::from(vec![3, 4]));
    /// ```
    #[must_use]
    pub fn chunk_every_step(&self, count: usize, step: usize) -> Sequence<Self>
    where
        T: Clone,
    {
        if count == 0 || step == 0 {
            return Sequence::new();
        }
        let mut chunks = Vec::new();
        let mut start = 0;
        while start < self.elements.len() {
            let end = usize::min(start + count, self.elements.len());
            chunks.push(Self::from(self.elements[start..end].to_vec()));
            if start + count >= self.elements.len() {
                break;
            }
            start += step;
        }
        Sequence { elements: chunks }
    }

    // =========================================================================
    // Reordering and Restructuring
    // =========================================================================

    /// Returns a new sequence removing duplicate elements, keeping the first
    /// occurrence of each and the overall order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Sequence;
    ///
    /// let distinct = Sequence::from(vec![1, 2, 1, 3, 2]).uniq();
    /// assert_eq!(distinct, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn uniq(&self) -> Self
    where
        T: Clone + PartialEq,
    {
        let mut distinct: Vec<T> = Vec::new();
        for element in &self.elements {
            if !distinct.contains(element) {
                distinct.push(element.clone());
            }
        }
        Self { elements: distinct }
    }

    /// Returns a new sequence with the elements in reverse order.
    #[must_use]
    pub fn reversed(&self) -> Self
    where
        T: Clone,
    {
        self.elements.iter().rev().cloned().collect()
    }

    /// Returns a new sequence with `tail` appended after the elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Sequence;
    ///
    /// let extended = Sequence::from(vec![1, 2]).concat(vec![3, 4]);
    /// assert_eq!(extended, vec![1, 2, 3, 4]);
    /// ```
    pub fn concat(&self, tail: impl IntoIterator<Item = T>) -> Self
    where
        T: Clone,
    {
        self.elements.iter().cloned().chain(tail).collect()
    }

    /// Returns a new sequence with the elements sorted ascending.
    #[must_use]
    pub fn sorted(&self) -> Self
    where
        T: Clone + Ord,
    {
        let mut elements = self.elements.clone();
        elements.sort();
        Self { elements }
    }

    /// Returns a new sequence sorted ascending by `key`.
    pub fn sorted_by<K: Ord>(&self, key: impl Fn(&T) -> K) -> Self
    where
        T: Clone,
    {
        let mut elements = self.elements.clone();
        elements.sort_by_key(|element| key(element));
        Self { elements }
    }

    /// Zips corresponding elements of two sequences into pairs, finishing
    /// with the shorter of the two.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Sequence;
    ///
    /// let pairs = Sequence::from(vec![1, 2, 3]).zip(&Sequence::from(vec!["a", "b"]));
    /// assert_eq!(pairs, vec![(1, "a"), (2, "b")]);
    /// ```
    pub fn zip<U: Clone>(&self, other: &Sequence<U>) -> Sequence<(T, U)>
    where
        T: Clone,
    {
        self.elements
            .iter()
            .cloned()
            .zip(other.elements.iter().cloned())
            .collect()
    }

    /// Copies the elements into a plain `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.clone()
    }
}

impl<T: Clone> Sequence<Sequence<T>> {
    /// Concatenates the inner sequences into a single flat sequence.
    ///
    /// Flattening removes exactly one level of nesting, undoing
    /// [`chunk_every`](Sequence::chunk_every) and
    /// [`group_by`](Sequence::group_by) style groupings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Sequence;
    ///
    /// let chunked = Sequence::from(vec![1, 2, 3, 4, 5]).chunk_every(2);
    /// assert_eq!(chunked.flatten(), vec![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn flatten(&self) -> Sequence<T> {
        self.elements
            .iter()
            .flat_map(|inner| inner.elements.iter().cloned())
            .collect()
    }
}

impl<K: PartialEq + Clone, V: Clone> Sequence<(K, V)> {
    /// Copies the pairs into a [`Mapping`], the inverse of
    /// [`Mapping::to_sequence`].
    ///
    /// A later duplicate key overwrites the earlier value while keeping the
    /// first-insertion position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Sequence;
    ///
    /// let mapping = Sequence::from(vec![("a", 1), ("b", 2)]).to_mapping();
    /// assert_eq!(mapping.get(&"a"), Some(&1));
    /// ```
    #[must_use]
    pub fn to_mapping(&self) -> Mapping<K, V> {
        self.elements.iter().cloned().collect()
    }
}

// =============================================================================
// Conversions and Iteration
// =============================================================================

impl<T> From<Vec<T>> for Sequence<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    #[inline]
    fn from(elements: &[T]) -> Self {
        Self {
            elements: elements.to_vec(),
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        Self {
            elements: iterable.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

// The original compares pipelines directly against plain lists in its test
// suite; mirroring that keeps assertions lightweight.
impl<T: PartialEq> PartialEq<Vec<T>> for Sequence<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.elements == *other
    }
}

impl<T: PartialEq> PartialEq<[T]> for Sequence<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.elements == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Sequence<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.elements == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transformations_leave_the_receiver_untouched() {
        let sequence = Sequence::from(vec![1, 2, 3]);
        let _ = sequence.map(|x| x * 2);
        let _ = sequence.filter(|x| *x > 1);
        let _ = sequence.reversed();
        assert_eq!(sequence, vec![1, 2, 3]);
    }

    #[test]
    fn chunk_every_break_matches_the_original_semantics() {
        // step < count with the final chunk reaching the end: the scan
        // stops once a chunk has covered the tail.
        let windows = Sequence::from(vec![1, 2, 3, 4, 5]).chunk_every_step(3, 2);
        assert_eq!(windows.len(), 2);
        assert_eq!(windows.at(0).unwrap(), &Sequence::from(vec![1, 2, 3]));
        assert_eq!(windows.at(1).unwrap(), &Sequence::from(vec![3, 4, 5]));
    }

    #[test]
    fn signed_amounts_saturate() {
        let sequence = Sequence::from(vec![1, 2, 3]);
        assert_eq!(sequence.take(99), vec![1, 2, 3]);
        assert_eq!(sequence.take(-99), vec![1, 2, 3]);
        assert_eq!(sequence.drop(99), Sequence::new());
        assert_eq!(sequence.drop(-99), Sequence::new());
    }

    #[test]
    fn aggregates_on_empty_sequences() {
        let empty = Sequence::<i32>::new();
        assert_eq!(empty.sum(), 0);
        assert_eq!(empty.product(), 1);
        assert_eq!(empty.min(), None);
        assert_eq!(empty.min_max(), None);
        assert!(empty.all(|_| false));
        assert!(!empty.any(|_| true));
    }

    #[test]
    fn fetch_reports_index_and_length() {
        let error = Sequence::from(vec![1]).fetch(4).unwrap_err();
        assert_eq!(error, OutOfBoundsError { index: 4, len: 1 });
    }
}
