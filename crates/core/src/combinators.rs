//! # Sequence Combinators (Session 0)
//!
//! Higher-order functions that lift scalar operators onto whole sequences:
//!
//! - [`map_seq`]: apply `f` to every element, lazily
//! - [`zip_combine`]: pair two sequences, stopping at the shorter one
//! - [`reduce`]: left fold seeded by the first element
//!
//! and the list utilities derived from them: [`neg_list`], [`add_lists`],
//! [`sum_seq`], [`prod`].
//!
//! ## Edge Cases
//!
//! `reduce` has no explicit initial accumulator. On an empty input it
//! returns `T::default()`, which is `0.0` for `f64`. That makes
//! `prod(Vec::new())` equal to `0.0` rather than the multiplicative identity.
//!
//! ```rust
//! use minitorch_core::combinators::{add_lists, prod, sum_seq, zip_combine};
//!
//! let pairs: Vec<_> = zip_combine([1.0, 2.0, 3.0], [4.0, 5.0]).collect();
//! assert_eq!(pairs, vec![(1.0, 4.0), (2.0, 5.0)]);
//!
//! assert_eq!(add_lists([1.0, 2.0, 3.0], [10.0, 20.0]), vec![11.0, 22.0]);
//! assert_eq!(sum_seq(Vec::new()), 0.0);
//! assert_eq!(prod(Vec::new()), 0.0);
//! ```

use std::iter::FusedIterator;

use crate::operators::{add, mul, neg};

/// Lazy adapter returned by [`map_seq`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Map<I, F> {
    iter: I,
    f: F,
}

impl<I, F, T> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iter.next().map(&mut self.f)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, F, T> FusedIterator for Map<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item) -> T,
{
}

/// Apply `f` to each element of `seq`, in order.
///
/// Nothing is evaluated until the result is iterated, and nothing is
/// buffered: the adapter can be restarted only by cloning it before use,
/// which requires the source iterator to be `Clone`.
pub fn map_seq<I, F, T>(f: F, seq: I) -> Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> T,
{
    Map {
        iter: seq.into_iter(),
        f,
    }
}

/// Lazy adapter returned by [`zip_combine`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ZipCombine<A, B> {
    a: A,
    b: B,
    done: bool,
}

impl<A, B> Iterator for ZipCombine<A, B>
where
    A: Iterator,
    B: Iterator,
{
    type Item = (A::Item, B::Item);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        // `a` is always pulled first; if `b` is then exhausted, that element
        // of `a` is dropped.
        let pair = self.a.next().and_then(|x| self.b.next().map(|y| (x, y)));
        if pair.is_none() {
            self.done = true;
        }
        pair
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (a_lo, a_hi) = self.a.size_hint();
        let (b_lo, b_hi) = self.b.size_hint();
        let hi = match (a_hi, b_hi) {
            (Some(x), Some(y)) => Some(x.min(y)),
            (Some(x), None) | (None, Some(x)) => Some(x),
            (None, None) => None,
        };
        (a_lo.min(b_lo), hi)
    }
}

impl<A: Iterator, B: Iterator> FusedIterator for ZipCombine<A, B> {}

/// Pair up elements of `a` and `b`, stopping as soon as either runs out.
///
/// Length mismatches are not an error; the longer tail is ignored.
pub fn zip_combine<A, B>(a: A, b: B) -> ZipCombine<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator,
{
    ZipCombine {
        a: a.into_iter(),
        b: b.into_iter(),
        done: false,
    }
}

/// Left fold whose accumulator is seeded by the first element.
///
/// Returns `T::default()` for an empty sequence.
pub fn reduce<I, F, T>(f: F, seq: I) -> T
where
    I: IntoIterator<Item = T>,
    F: FnMut(T, T) -> T,
    T: Default,
{
    seq.into_iter().reduce(f).unwrap_or_default()
}

/// Negate every element.
pub fn neg_list<I>(seq: I) -> Vec<f64>
where
    I: IntoIterator<Item = f64>,
{
    map_seq(neg, seq).collect()
}

/// Element-wise sum, truncated to the shorter input.
pub fn add_lists<A, B>(a: A, b: B) -> Vec<f64>
where
    A: IntoIterator<Item = f64>,
    B: IntoIterator<Item = f64>,
{
    map_seq(|(x, y)| reduce(add, [x, y]), zip_combine(a, b)).collect()
}

/// Sum of all elements; `0.0` when empty.
pub fn sum_seq<I>(seq: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    reduce(add, seq)
}

/// Product of all elements.
///
/// An empty input yields `0.0`, not `1.0`, following [`reduce`].
pub fn prod<I>(seq: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    reduce(mul, seq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operators::{log, relu};
    use crate::OperatorError;
    use std::cell::Cell;

    #[test]
    fn test_map_seq_preserves_order() {
        let out: Vec<f64> = map_seq(relu, [-1.0, 2.0, -3.0, 4.0]).collect();
        assert_eq!(out, vec![0.0, 2.0, 0.0, 4.0]);
    }

    #[test]
    fn test_map_seq_is_lazy() {
        let calls = Cell::new(0);
        let mut it = map_seq(
            |x: f64| {
                calls.set(calls.get() + 1);
                x * 2.0
            },
            [1.0, 2.0, 3.0],
        );
        assert_eq!(calls.get(), 0);
        assert_eq!(it.next(), Some(2.0));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_map_seq_restart_by_clone() {
        let pipeline = map_seq(neg, vec![1.0, 2.0]);
        let first: Vec<f64> = pipeline.clone().collect();
        let second: Vec<f64> = pipeline.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_map_seq_propagates_domain_errors() {
        let ok: Result<Vec<f64>, OperatorError> = map_seq(log, [1.0, 1.0]).collect();
        assert_eq!(ok.unwrap(), vec![0.0, 0.0]);

        let err: Result<Vec<f64>, OperatorError> = map_seq(log, [1.0, -2.0, 3.0]).collect();
        assert_eq!(err.unwrap_err().value(), -2.0);
    }

    #[test]
    fn test_zip_combine_truncates() {
        let pairs: Vec<_> = zip_combine([1.0, 2.0, 3.0], [4.0, 5.0]).collect();
        assert_eq!(pairs, vec![(1.0, 4.0), (2.0, 5.0)]);

        let pairs: Vec<_> = zip_combine([1.0], [4.0, 5.0, 6.0]).collect();
        assert_eq!(pairs, vec![(1.0, 4.0)]);
    }

    #[test]
    fn test_zip_combine_pulls_a_first() {
        let mut a = vec![1, 2, 3].into_iter();
        let pairs: Vec<_> = zip_combine(a.by_ref(), [10]).collect();
        assert_eq!(pairs, vec![(1, 10)]);
        // The element of `a` pulled when `b` ran dry is gone.
        assert_eq!(a.next(), Some(3));
    }

    #[test]
    fn test_zip_combine_stays_done() {
        let mut it = zip_combine(Vec::<f64>::new(), [1.0]);
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_zip_combine_size_hint() {
        let it = zip_combine([1.0, 2.0, 3.0], [4.0, 5.0]);
        assert_eq!(it.size_hint(), (2, Some(2)));
    }

    #[test]
    fn test_reduce_empty_is_zero() {
        assert_eq!(reduce(add, Vec::<f64>::new()), 0.0);
        assert_eq!(reduce(mul, Vec::<f64>::new()), 0.0);
    }

    #[test]
    fn test_reduce_is_left_fold() {
        // ((8 - 4) - 2) = 2, not 8 - (4 - 2) = 6
        assert_eq!(reduce(|a: f64, b| a - b, [8.0, 4.0, 2.0]), 2.0);
        assert_eq!(reduce(add, [5.0]), 5.0);
    }

    #[test]
    fn test_neg_list() {
        assert_eq!(neg_list([1.0, -2.0, 0.5]), vec![-1.0, 2.0, -0.5]);
        assert!(neg_list(Vec::new()).is_empty());
    }

    #[test]
    fn test_add_lists() {
        assert_eq!(add_lists([1.0, 2.0, 3.0], [10.0, 20.0]), vec![11.0, 22.0]);
        assert!(add_lists(Vec::new(), [1.0]).is_empty());
    }

    #[test]
    fn test_sum_and_prod() {
        assert_eq!(sum_seq([1.0, 2.0, 3.0, 4.0]), 10.0);
        assert_eq!(prod([1.0, 2.0, 3.0, 4.0]), 24.0);
        assert_eq!(sum_seq(Vec::new()), 0.0);
        assert_eq!(prod(Vec::new()), 0.0);
    }
}
