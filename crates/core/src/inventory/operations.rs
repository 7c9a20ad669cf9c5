//! Merge-on-add matching rules.

/// Returns true when `candidate` names the same item as `existing`.
///
/// The rule is a case-insensitive substring test: the candidate only has to
/// appear somewhere inside the existing name, so "milk" matches both "Milk"
/// and "Almond Milk".
pub fn name_matches(existing: &str, candidate: &str) -> bool {
    existing
        .to_lowercase()
        .contains(&candidate.to_lowercase())
}

/// Picks the row an add should merge into.
///
/// `rows` yields `(id, name)` pairs in any order. Among all matching rows the
/// lowest id wins, so repeated adds always land on the same row.
pub fn find_merge_target<'a, I>(rows: I, candidate: &str) -> Option<i64>
where
    I: IntoIterator<Item = (i64, &'a str)>,
{
    rows.into_iter()
        .filter(|(_, name)| name_matches(name, candidate))
        .map(|(id, _)| id)
        .min()
}
