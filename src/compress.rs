//! Common-prefix compression
//!
//! A full page whose keys share a run of leading bytes can trade that run
//! for extra fan-out instead of splitting: the shared bytes move inline
//! after the header and every slot is re-emitted densely at the narrower
//! suffix width. The logical key set is unchanged; only the physical
//! representation and the degree move.

use crate::config::{DIR_ENTRY_SIZE, PAGE_ID_SIZE};
use crate::page::Page;
use byteorder::{ByteOrder, NativeEndian};
use std::cell::RefCell;
use std::cmp::min;
use tracing::debug;

thread_local! {
    // page-sized scratch for in-place rebuilds; pages are too large to
    // stage on the stack
    static SCRATCH: RefCell<Vec<u8>> = const { RefCell::new(Vec::new()) };
}

/// Length of the longest common prefix of two byte strings
pub(crate) fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    let len = min(a.len(), b.len());
    for i in 0..len {
        if a[i] != b[i] {
            return i;
        }
    }
    len
}

/// Decide whether `page` must split, recompressing it in place when a
/// longer common prefix buys strictly more fan-out.
pub(crate) fn need_split(page: &mut Page) -> bool {
    if page.header.total_key < page.header.degree {
        return false;
    }
    let total = page.header.total_key;
    // a lone key would compare against itself; it has nothing to share
    if total == 1 {
        return true;
    }
    // the directory is sorted, so the first and last suffixes bracket
    // every key in between
    let pre_add = common_prefix_len(page.suffix(0), page.suffix(total - 1));
    if pre_add == 0 {
        return true;
    }
    let key_len = page.header.key_len as usize;
    debug_assert!(pre_add < key_len, "page holds duplicate keys");
    let degree =
        Page::calculate_degree((key_len - pre_add) as u8, page.header.pre_len + pre_add as u8);
    if degree <= page.header.degree {
        return true;
    }
    rebuild(page, pre_add, degree);
    false
}

/// Re-emit every slot at the narrowed suffix width, in sorted order, with
/// the extended prefix inline after the header.
fn rebuild(page: &mut Page, pre_add: usize, degree: u16) {
    let total = page.header.total_key as usize;
    let pre_len = page.header.pre_len as usize;
    let key_len = page.header.key_len as usize;
    let suf_len = key_len - pre_add;
    let new_slot = PAGE_ID_SIZE + suf_len;
    let data_len = page.data.len();

    SCRATCH.with(|cell| {
        let mut buf = cell.borrow_mut();
        buf.clear();
        buf.extend_from_slice(&page.data);
        let snapshot: &[u8] = &buf;
        let dir =
            |i: usize| NativeEndian::read_u16(&snapshot[data_len - DIR_ENTRY_SIZE * (total - i)..]) as usize;

        // the added prefix bytes lead every suffix; take them from the
        // smallest key and extend the stored prefix
        let first = dir(0);
        page.data[pre_len..pre_len + pre_add]
            .copy_from_slice(&snapshot[first + PAGE_ID_SIZE..first + PAGE_ID_SIZE + pre_add]);

        let mut curr = pre_len + pre_add;
        for i in 0..total {
            let off = dir(i);
            page.data[curr..curr + PAGE_ID_SIZE]
                .copy_from_slice(&snapshot[off..off + PAGE_ID_SIZE]);
            page.data[curr + PAGE_ID_SIZE..curr + new_slot]
                .copy_from_slice(&snapshot[off + PAGE_ID_SIZE + pre_add..off + PAGE_ID_SIZE + key_len]);
            let dir_pos = data_len - DIR_ENTRY_SIZE * (total - i);
            NativeEndian::write_u16(&mut page.data[dir_pos..dir_pos + DIR_ENTRY_SIZE], curr as u16);
            curr += new_slot;
        }
    });

    page.header.pre_len += pre_add as u8;
    page.header.key_len = suf_len as u8;
    page.header.degree = degree;
    debug!(
        page = page.header.pgno,
        pre_len = page.header.pre_len,
        degree,
        "recompressed page"
    );
}
