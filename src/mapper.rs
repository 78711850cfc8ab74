use crate::cursor::ByteCursor;
use crate::error::Result;
use crate::policy::Policy;
use zeroize::Zeroizing;

pub fn map_characters(
    policy: &Policy,
    length: usize,
    cursor: &mut ByteCursor<'_>,
) -> Result<Zeroizing<Vec<u8>>> {
    let mut chars = Zeroizing::new(Vec::with_capacity(length.max(policy.coverage.len())));

    map_coverage(policy, cursor, &mut chars)?;
    let coverage_bytes = cursor.position();

    map_fill(&policy.alphabet(), length, cursor, &mut chars)?;

    tracing::trace!(
        coverage_bytes,
        fill_bytes = cursor.position() - coverage_bytes,
        "mapped characters"
    );

    Ok(chars)
}

pub fn map_coverage(
    policy: &Policy,
    cursor: &mut ByteCursor<'_>,
    chars: &mut Vec<u8>,
) -> Result<()> {
    for set in policy.coverage_sets() {
        let byte = cursor.next_byte()?;
        chars.push(set[byte as usize % set.len()]);
    }
    Ok(())
}

pub fn map_fill(
    alphabet: &[u8],
    length: usize,
    cursor: &mut ByteCursor<'_>,
    chars: &mut Vec<u8>,
) -> Result<()> {
    while chars.len() < length {
        let byte = cursor.next_byte()?;
        chars.push(alphabet[byte as usize % alphabet.len()]);
    }
    Ok(())
}
