use std::any::type_name;

use super::ConvertError;

/// Narrow a wire integer into a smaller domain integer, naming `field` if it
/// does not fit.
pub fn narrow<T>(field: &'static str, value: impl Into<i64>) -> Result<T, ConvertError>
where
    T: TryFrom<i64>,
{
    let wide = value.into();
    T::try_from(wide).map_err(|_| ConvertError::OutOfRange {
        field,
        value: wide,
        target: type_name::<T>(),
    })
}
