//! Fixed-width key records
//!
//! A key record pairs an embedded child page id with a fixed-width payload.
//! Probe keys, insert inputs, and the fence and scan outputs always carry
//! the full logical payload (stored prefix included); on-page slots hold
//! only the suffix beyond the page's inline prefix.

use crate::config::PAGE_ID_SIZE;
use crate::error::PageId;
use byteorder::{ByteOrder, NativeEndian};

/// A borrowed fixed-width key record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySlice<'a> {
    page_no: PageId,
    payload: &'a [u8],
}

impl<'a> KeySlice<'a> {
    /// Create a key record from its embedded page id and payload bytes
    pub fn new(page_no: PageId, payload: &'a [u8]) -> Self {
        Self { page_no, payload }
    }

    /// The embedded child page id.
    ///
    /// On branch pages this is the child governing the key's interval; in
    /// the last sorted slot of any page it is the right-sibling link.
    pub fn page_no(&self) -> PageId {
        self.page_no
    }

    /// The payload bytes
    pub fn payload(&self) -> &'a [u8] {
        self.payload
    }
}

/// An owned key buffer of fixed width.
///
/// Receives the fence key on split and reassembled keys during scans; a
/// single buffer is reused across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBuf {
    page_no: PageId,
    payload: Vec<u8>,
}

impl KeyBuf {
    /// A zeroed key buffer of `width` payload bytes
    pub fn new(width: usize) -> Self {
        Self { page_no: PageId(0), payload: vec![0; width] }
    }

    /// The embedded page id
    pub fn page_no(&self) -> PageId {
        self.page_no
    }

    /// Set the embedded page id
    pub fn set_page_no(&mut self, page_no: PageId) {
        self.page_no = page_no;
    }

    /// The payload bytes
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub(crate) fn payload_mut(&mut self) -> &mut [u8] {
        &mut self.payload
    }

    /// Borrow as a key record
    pub fn as_slice(&self) -> KeySlice<'_> {
        KeySlice::new(self.page_no, &self.payload)
    }
}

/// Read the page id stored at the head of an on-page slot
pub(crate) fn read_page_no(slot: &[u8]) -> PageId {
    PageId(NativeEndian::read_u64(&slot[..PAGE_ID_SIZE]))
}

/// Write the page id at the head of an on-page slot
pub(crate) fn write_page_no(slot: &mut [u8], page_no: PageId) {
    NativeEndian::write_u64(&mut slot[..PAGE_ID_SIZE], page_no.0)
}
