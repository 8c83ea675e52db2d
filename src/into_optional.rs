use crate::optional::Optional;

/// Lifts a value into an [`Optional`].
///
/// A plain value always becomes `Full`. An `Option` is treated as a nullable
/// reference: `None` becomes `Empty`, `Some(v)` becomes `Full(v)`.
pub trait IntoOptional<T> {
    fn into_optional(self) -> Optional<T>;
}

impl<T> IntoOptional<T> for T {
    fn into_optional(self) -> Optional<T> {
        Optional::Full(self)
    }
}

impl<T> IntoOptional<T> for Option<T> {
    fn into_optional(self) -> Optional<T> {
        match self {
            Some(value) => Optional::Full(value),
            None => Optional::Empty,
        }
    }
}

/// Free-function form of [`IntoOptional::into_optional`].
pub fn to_optional<T>(value: impl IntoOptional<T>) -> Optional<T> {
    value.into_optional()
}
