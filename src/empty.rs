use std::any::Any;
use std::fmt::{Display, Formatter};

use crate::optional::Optional;

/// An empty optional whose payload type has not been chosen yet.
///
/// Converts into `Optional<T>::Empty` for any `T` and compares equal to every
/// empty `Optional<T>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Empty;

impl Empty {
    pub const fn typed<T>(self) -> Optional<T> {
        Optional::Empty
    }
}

/// The untyped empty value.
pub const fn empty() -> Empty {
    Empty
}

/// Builds a full optional, inferring `T` from `value`.
pub const fn full<T>(value: T) -> Optional<T> {
    Optional::Full(value)
}

impl<T> From<Empty> for Optional<T> {
    fn from(_: Empty) -> Self {
        Optional::Empty
    }
}

impl<T> PartialEq<Empty> for Optional<T> {
    fn eq(&self, _: &Empty) -> bool {
        self.is_empty()
    }
}

impl<T> PartialEq<Optional<T>> for Empty {
    fn eq(&self, other: &Optional<T>) -> bool {
        other.is_empty()
    }
}

impl Display for Empty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Empty")
    }
}

/// Equality across optionals whose payload types are only known at runtime.
///
/// An empty value equals the untyped [`Empty`] regardless of its payload type,
/// while two typed optionals are only ever equal when their payload types match.
/// So `Optional::<i32>::Empty` equals `Empty` but not `Optional::<String>::Empty`.
pub trait DynOptional: Any {
    fn has_value(&self) -> bool;

    fn as_any(&self) -> &dyn Any;

    fn dyn_eq(&self, other: &dyn DynOptional) -> bool;
}

impl<T: PartialEq + 'static> DynOptional for Optional<T> {
    fn has_value(&self) -> bool {
        Optional::has_value(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn DynOptional) -> bool {
        let other = other.as_any();
        if other.is::<Empty>() {
            return self.is_empty();
        }
        other.downcast_ref::<Optional<T>>().is_some_and(|o| self == o)
    }
}

impl DynOptional for Empty {
    fn has_value(&self) -> bool {
        false
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn DynOptional) -> bool {
        !other.has_value()
    }
}
