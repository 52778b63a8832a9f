use tracing::info;

use crate::model::member::{MemberRecord, MemberSnapshot};
use crate::store::MemberStore;

pub fn find(records: &[MemberRecord], id: u64) -> Option<&MemberRecord> {
    records.iter().find(|record| record.id == id)
}

pub fn find_mut(records: &mut [MemberRecord], id: u64) -> Option<&mut MemberRecord> {
    records.iter_mut().find(|record| record.id == id)
}

/// Append a fresh record for a member we have not seen before.
///
/// Existing records keep their first-sighting snapshot. Bots are never tracked.
/// Returns whether a record was appended.
pub fn ensure_tracked(records: &mut Vec<MemberRecord>, snapshot: &MemberSnapshot) -> bool {
    if snapshot.is_bot || find(records, snapshot.id).is_some() {
        return false;
    }

    records.push(MemberRecord::new(snapshot));
    true
}

/// Track a batch of members with a single load and at most one save.
pub async fn track_members(store: &MemberStore, snapshots: &[MemberSnapshot]) -> usize {
    let mut records = store.load().await;

    let added = snapshots
        .iter()
        .filter(|snapshot| ensure_tracked(&mut records, snapshot))
        .count();

    if added > 0 {
        store.save(&records).await;
        info!(added, total = records.len(), "member store synchronized");
    }

    added
}
