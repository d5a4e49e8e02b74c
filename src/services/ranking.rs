use crate::domain::{MemberRecord, RankedEntry};
use std::cmp::Reverse;
use std::collections::HashMap;

/// Orders members by local score, then by stars, both descending.
///
/// Member ids are ignored and every record is kept. Missing names and
/// counters are filled in with their defaults before sorting.
pub fn rank(members: HashMap<String, MemberRecord>) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = members.into_values().map(RankedEntry::from).collect();

    entries.sort_by_key(|entry| (Reverse(entry.local_score), Reverse(entry.stars)));
    entries
}
