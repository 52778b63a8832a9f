use hearth_database::MemberRecord;

pub const LEADERBOARD_SIZE: usize = 10;

/// Highest-ranked members by level, then experience. Ties keep document order.
pub fn top(records: &[MemberRecord], n: usize) -> Vec<&MemberRecord> {
    let mut ranked: Vec<&MemberRecord> = records.iter().collect();
    ranked.sort_by(|left, right| (right.level, right.exp).cmp(&(left.level, left.exp)));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{LEADERBOARD_SIZE, top};
    use hearth_database::{MemberRecord, MemberSnapshot};

    fn record(id: u64, level: u32, exp: u64) -> MemberRecord {
        let mut record = MemberRecord::new(&MemberSnapshot {
            id,
            username: format!("member{id}"),
            ..Default::default()
        });
        record.level = level;
        record.exp = exp;
        record
    }

    fn ids(ranked: &[&MemberRecord]) -> Vec<u64> {
        ranked.iter().map(|record| record.id).collect()
    }

    #[test]
    fn orders_by_level_then_exp() {
        let records = vec![record(1, 2, 10), record(2, 5, 0), record(3, 2, 90), record(4, 1, 99)];

        assert_eq!(ids(&top(&records, LEADERBOARD_SIZE)), vec![2, 3, 1, 4]);
    }

    #[test]
    fn ties_keep_original_order() {
        let records = vec![record(1, 3, 5), record(2, 3, 5), record(3, 3, 5)];

        assert_eq!(ids(&top(&records, 2)), vec![1, 2]);
    }

    #[test]
    fn empty_store_has_no_entries() {
        assert!(top(&[], LEADERBOARD_SIZE).is_empty());
    }

    proptest! {
        #[test]
        fn ranking_is_sorted_and_bounded(
            entries in proptest::collection::vec((1u32..20, 0u64..2_000), 0..40),
        ) {
            let records: Vec<MemberRecord> = entries
                .iter()
                .enumerate()
                .map(|(idx, (level, exp))| record(idx as u64, *level, *exp))
                .collect();

            let ranked = top(&records, LEADERBOARD_SIZE);

            prop_assert!(ranked.len() <= LEADERBOARD_SIZE);
            prop_assert_eq!(ranked.len(), records.len().min(LEADERBOARD_SIZE));
            for pair in ranked.windows(2) {
                let (upper, lower) = (pair[0], pair[1]);
                prop_assert!((upper.level, upper.exp) >= (lower.level, lower.exp));
                if (upper.level, upper.exp) == (lower.level, lower.exp) {
                    prop_assert!(upper.id < lower.id);
                }
            }
        }
    }
}
