use std::iter::FusedIterator;

use itertools::Itertools;

use crate::optional::Optional;

/// Borrowing iterator over the zero or one payloads of an [`Optional`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

/// Owning iterator over the zero or one payloads of an [`Optional`].
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Optional<T> {
    /// A fresh view of the current state; each call starts over.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_ref().into(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for Iter<'_, T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.into() }
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects into `Full(collection)` only if every element is full.
/// Stops pulling from the source at the first empty element.
impl<T, V: FromIterator<T>> FromIterator<Optional<T>> for Optional<V> {
    fn from_iter<I: IntoIterator<Item = Optional<T>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Option::from)
            .collect::<Option<V>>()
            .into()
    }
}

/// Sequence helpers that answer with an [`Optional`].
pub trait OptionalIterExt: IntoIterator + Sized {
    fn first_or_empty(self) -> Optional<Self::Item> {
        self.first_or_empty_where(|_| true)
    }

    /// The first element matching `predicate`. Elements after the match are
    /// never pulled.
    fn first_or_empty_where(self, predicate: impl FnMut(&Self::Item) -> bool) -> Optional<Self::Item> {
        self.into_iter().find(predicate).into()
    }

    /// `Full` only when the sequence holds exactly one element.
    fn single_or_empty(self) -> Optional<Self::Item> {
        self.into_iter().exactly_one().ok().into()
    }
}

impl<I: IntoIterator> OptionalIterExt for I {}
