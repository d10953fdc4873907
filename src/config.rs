//! Process-wide page geometry configuration
//!
//! The on-page format is shared between the writer and any reader of raw
//! pages, so the page size is a one-shot, process-global value: it may be
//! configured once, before the first page is initialized, and is immutable
//! afterwards. Readers and writers of the same files must agree on it.

use crate::error::{Error, Result};
use static_assertions::const_assert;
use std::sync::OnceLock;

/// The default page size (4KB)
pub const DEFAULT_PAGE_SIZE: usize = 4096;

/// Smallest supported page size
pub const MIN_PAGE_SIZE: usize = 512;

/// Largest supported page size; slot-directory entries are 16-bit offsets
pub const MAX_PAGE_SIZE: usize = 1 << 16;

/// Width of an on-page page-id field
pub const PAGE_ID_SIZE: usize = 8;

/// Width of a slot-directory entry
pub const DIR_ENTRY_SIZE: usize = 2;

const_assert!(MIN_PAGE_SIZE.is_power_of_two());
const_assert!(DEFAULT_PAGE_SIZE >= MIN_PAGE_SIZE);
const_assert!(DEFAULT_PAGE_SIZE <= MAX_PAGE_SIZE);

static PAGE_SIZE: OnceLock<usize> = OnceLock::new();

/// Configure the process-wide page size.
///
/// Must be called before the first page is initialized. Setting the same
/// value again is a no-op; a conflicting re-set is rejected because pages
/// laid out under the old size would become unreadable.
pub fn set_page_size(size: usize) -> Result<()> {
    if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&size) || !size.is_power_of_two() {
        return Err(Error::InvalidParameter(
            "page size must be a power of two between 512 and 65536",
        ));
    }
    let current = *PAGE_SIZE.get_or_init(|| size);
    if current != size {
        return Err(Error::InvalidOperation("page size already configured"));
    }
    Ok(())
}

/// The configured page size.
///
/// Falls back to [`DEFAULT_PAGE_SIZE`] (and pins it) when no explicit size
/// was set before the first page was touched.
pub fn page_size() -> usize {
    *PAGE_SIZE.get_or_init(|| DEFAULT_PAGE_SIZE)
}
