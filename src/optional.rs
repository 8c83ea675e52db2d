use std::fmt::{Display, Formatter};

use crate::error::{OResult, OptionalError};

/// A value of type `T`, or the absence of one.
///
/// The payload only exists in the `Full` variant, so an empty optional never
/// exposes a `T`. All combinators take `self` by value; use [`Optional::as_ref`]
/// to work on a borrowed payload instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Optional<T> {
    Full(T),
    Empty,
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::Empty
    }
}

impl<T> Optional<T> {
    pub const fn full(value: T) -> Self {
        Optional::Full(value)
    }

    pub const fn empty() -> Self {
        Optional::Empty
    }

    pub const fn has_value(&self) -> bool {
        matches!(self, Optional::Full(_))
    }

    pub const fn is_empty(&self) -> bool {
        !self.has_value()
    }

    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Full(value) => Optional::Full(value),
            Optional::Empty => Optional::Empty,
        }
    }

    pub fn value_or(self, fallback: T) -> T {
        self.fold(|x| x, fallback)
    }

    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.value_or(T::default())
    }

    /// Returns the payload, or [`OptionalError::Empty`] when there is none.
    pub fn value(self) -> OResult<T> {
        self.fold_lazy(Ok, || Err(OptionalError::Empty))
    }

    /// Eliminates the optional. `else_value` is built by the caller whether or
    /// not it ends up being used; see [`Optional::fold_lazy`].
    pub fn fold<R>(self, on_value: impl FnOnce(T) -> R, else_value: R) -> R {
        self.fold_lazy(on_value, || else_value)
    }

    /// Runs exactly one of the two branches: `on_value` when full,
    /// `else_value` when empty.
    pub fn fold_lazy<R>(self, on_value: impl FnOnce(T) -> R, else_value: impl FnOnce() -> R) -> R {
        match self {
            Optional::Full(value) => on_value(value),
            Optional::Empty => else_value(),
        }
    }

    pub fn select<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
        self.select_many(|x| Optional::Full(f(x)))
    }

    pub fn where_(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        match self {
            Optional::Full(value) => {
                if predicate(&value) {
                    Optional::Full(value)
                } else {
                    Optional::Empty
                }
            }
            Optional::Empty => Optional::Empty,
        }
    }

    /// Monadic bind. The result is whatever `f` returns, or `Empty` when
    /// there is nothing to feed it.
    pub fn select_many<U>(self, f: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
        self.fold_lazy(f, || Optional::Empty)
    }

    /// Bind followed by `combine(original, intermediate)`.
    ///
    /// Nesting these keeps every earlier payload in scope:
    ///
    /// ```
    /// use optional_value::Optional;
    ///
    /// let sum = Optional::Full(42)
    ///     .select_many_with(|_| Optional::Full(100), |i, j| (i, j))
    ///     .select(|(i, j)| i + j);
    /// assert_eq!(Optional::Full(142), sum);
    /// ```
    pub fn select_many_with<K, R>(
        self,
        f: impl FnOnce(&T) -> Optional<K>,
        combine: impl FnOnce(T, K) -> R,
    ) -> Optional<R> {
        self.select_many(|value| f(&value).select(|next| combine(value, next)))
    }

    pub fn or_else(self, other: impl Into<Optional<T>>) -> Self {
        match self {
            Optional::Full(value) => Optional::Full(value),
            Optional::Empty => other.into(),
        }
    }

    pub fn do_(self, action: impl FnOnce(T)) {
        self.do_else(action, || {})
    }

    pub fn do_else(self, action: impl FnOnce(T), else_action: impl FnOnce()) {
        match self {
            Optional::Full(value) => action(value),
            Optional::Empty => else_action(),
        }
    }
}

impl<T> Optional<Optional<T>> {
    pub fn flatten(self) -> Optional<T> {
        self.select_many(|inner| inner)
    }
}

/// Collapses a doubly-wrapped optional; any emptiness at either level wins.
pub fn flatten<T>(option: Optional<Optional<T>>) -> Optional<T> {
    option.flatten()
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(x) => Optional::Full(x),
            None => Optional::Empty,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Full(x) => Some(x),
            Optional::Empty => None,
        }
    }
}

impl<T, E> From<Result<T, E>> for Optional<T> {
    fn from(value: Result<T, E>) -> Self {
        value.ok().into()
    }
}

impl<T: Display> Display for Optional<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Optional::Full(value) => write!(f, "Full({})", value),
            Optional::Empty => write!(f, "Empty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_errors_when_empty() -> OResult<()> {
        assert_eq!(7, Optional::Full(7).value()?);
        assert_eq!(Err(OptionalError::Empty), Optional::<i32>::Empty.value());
        Ok(())
    }

    #[test]
    fn present_null_is_not_empty() {
        let null_payload: Optional<Option<&str>> = Optional::Full(None);
        assert!(null_payload.has_value());
        assert_ne!(Optional::<Option<&str>>::Empty, null_payload);
    }

    #[test]
    fn where_calls_predicate_at_most_once() {
        let mut calls = 0;
        let kept = Optional::Full(5).where_(|x| {
            calls += 1;
            *x > 3
        });
        assert_eq!(Optional::Full(5), kept);
        assert_eq!(1, calls);

        let dropped = Optional::<i32>::Empty.where_(|_| {
            calls += 1;
            true
        });
        assert!(dropped.is_empty());
        assert_eq!(1, calls);
    }

    #[test]
    fn value_or_default() {
        assert_eq!(3, Optional::Full(3).value_or_default());
        assert_eq!(String::new(), Optional::<String>::Empty.value_or_default());
    }

    #[test]
    fn std_option_round_trip() {
        let opt: Option<i32> = Optional::Full(1).into();
        assert_eq!(Some(1), opt);
        assert_eq!(Optional::<i32>::Empty, Optional::from(None::<i32>));
        assert_eq!(Optional::Full(8), Optional::from("8".parse::<i32>()));
    }

    #[test]
    fn display() {
        assert_eq!("Full(2)", Optional::Full(2).to_string());
        assert_eq!("Empty", Optional::<i32>::Empty.to_string());
    }
}
