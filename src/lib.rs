mod empty;
mod error;
mod into_optional;
mod iter;
mod optional;

pub use crate::empty::{empty, full, DynOptional, Empty};
pub use crate::error::{OResult, OptionalError};
pub use crate::into_optional::{to_optional, IntoOptional};
pub use crate::iter::{IntoIter, Iter, OptionalIterExt};
pub use crate::optional::{flatten, Optional};
