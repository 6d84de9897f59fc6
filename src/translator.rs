use crate::index_map::IndexMapEntry;

/// Maps a 0-based transcript index to its reference coordinate.
///
/// Returns `None` when `query` falls outside `[0, transcript_length)` or the
/// resulting coordinate does not fit an `i64`. Queries inside an insertion
/// resolve to the reference coordinate of the last aligned base before it.
///
/// `index_map` must be sorted by anchor, as built by `IndexMap::build`.
pub fn translate(
    query: i64,
    index_map: &[IndexMapEntry],
    ref_start: i64,
    transcript_length: i64,
) -> Option<i64> {
    debug_assert!(
        index_map.windows(2).all(|w| w[0].anchor <= w[1].anchor),
        "index map anchors must be non-decreasing"
    );
    if query < 0 || query >= transcript_length {
        return None;
    }

    let applied = &index_map[..index_map.partition_point(|entry| entry.anchor < query)];
    let total_adjustment = applied
        .iter()
        .try_fold(0i64, |sum, entry| sum.checked_add(entry.adjustment))?;
    let mut ref_coord = ref_start
        .checked_add(query)?
        .checked_add(total_adjustment)?;

    if let Some(last) = applied.last() {
        if last.adjustment < 0 {
            // How far the query sits inside the insertion.
            let overshoot = last
                .anchor
                .checked_sub(query)?
                .checked_sub(last.adjustment)?;
            if overshoot > 0 {
                ref_coord = ref_coord.checked_add(overshoot)?;
            }
        }
    }
    Some(ref_coord)
}
