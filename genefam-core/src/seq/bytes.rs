//! Substring search over raw sequence bytes.

use memchr::{memchr_iter, memmem};

/// Clamp `start..end` to `hay`, or `None` when the window is inverted.
#[inline]
fn window(hay: &[u8], start: usize, end: usize) -> Option<(usize, usize)> {
    let start = start.min(hay.len());
    let end = end.min(hay.len());
    (start <= end).then_some((start, end))
}

/// Leftmost match of `pat` inside `hay[start..end]`, as an index into `hay`.
pub fn find(hay: &[u8], pat: &[u8], start: usize, end: usize) -> Option<usize> {
    let (start, end) = window(hay, start, end)?;
    if pat.is_empty() {
        return Some(start);
    }
    memmem::find(&hay[start..end], pat).map(|i| start + i)
}

/// Rightmost match of `pat` inside `hay[start..end]`, as an index into `hay`.
/// Overlapping occurrences count, so `rfind(b"AAAA", b"AA", ..)` is 2.
pub fn rfind(hay: &[u8], pat: &[u8], start: usize, end: usize) -> Option<usize> {
    let (start, end) = window(hay, start, end)?;
    if pat.is_empty() {
        return Some(end);
    }
    memmem::rfind(&hay[start..end], pat).map(|i| start + i)
}

pub fn count_byte(hay: &[u8], b: u8) -> usize {
    memchr_iter(b, hay).count()
}
