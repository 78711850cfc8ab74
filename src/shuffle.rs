use crate::cursor::ByteCursor;
use crate::error::Result;

/// Number of bytes `shuffle` reads for a sequence of `len` elements.
pub fn draws_needed(len: usize) -> usize {
    len.saturating_sub(1)
}

/// Byte-driven Fisher-Yates, back to front. For `i` from `len` down to 2,
/// swap positions `i - 1` and `byte % i`.
///
/// Fails rather than leaving a suffix unpermuted if the cursor runs dry.
pub fn shuffle<T>(items: &mut [T], cursor: &mut ByteCursor<'_>) -> Result<()> {
    for i in (2..=items.len()).rev() {
        let j = cursor.next_byte()? as usize % i;
        items.swap(i - 1, j);
    }
    Ok(())
}
