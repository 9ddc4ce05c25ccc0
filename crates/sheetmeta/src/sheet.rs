//! Sheet-level hints for importers.

use crate::descriptor::TypeDescriptor;
use crate::util::is_blank;

/// Returned by [`first_row_with_data`] when the type declares no first row.
pub const NO_FIRST_ROW: i32 = -1;

/// Name of the sheet holding the type's rows.
///
/// `None` when the type has no `#[sheet]` annotation or declares a blank
/// name; the caller picks its own default, usually the type name.
pub fn sheet_name(descriptor: &TypeDescriptor) -> Option<String> {
    descriptor
        .sheet()
        .and_then(|sheet| sheet.sheet_name.as_deref())
        .filter(|name| !is_blank(name))
        .map(str::to_string)
}

/// Index of the first row holding data, or [`NO_FIRST_ROW`].
pub fn first_row_with_data(descriptor: &TypeDescriptor) -> i32 {
    descriptor
        .sheet()
        .map_or(NO_FIRST_ROW, |sheet| sheet.first_row_with_data)
}
