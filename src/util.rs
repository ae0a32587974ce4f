/// Numeric conversion helpers.
///
/// This module converts evaluated subscripts to array indices and parses the
/// numbers found in symbol value records. Conversions that could lose data
/// or go out of range return `None` instead of wrapping or saturating.
pub mod num;
