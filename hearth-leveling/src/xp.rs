use std::ops::RangeInclusive;

use rand::Rng;

use hearth_database::MemberRecord;

/// Experience rolled for each qualifying chat message.
pub const CHAT_XP_RANGE: RangeInclusive<u64> = 30..=60;
/// Flat experience granted to every member in voice on each scan tick.
pub const VOICE_XP_PER_TICK: u64 = 60;

/// Where a gain of experience came from. Each source has its own tier ladder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum XpSource {
    Chat,
    Voice,
}

impl XpSource {
    pub fn label(self) -> &'static str {
        match self {
            Self::Chat => "Chat",
            Self::Voice => "Voice",
        }
    }
}

pub fn roll_chat_xp(rng: &mut impl Rng) -> u64 {
    rng.random_range(CHAT_XP_RANGE)
}

/// Add experience to a record and resolve a level-up.
///
/// Crossing the threshold moves the member up exactly one level and resets
/// `exp` to zero; any surplus from the triggering gain is dropped. Returns the
/// new level when a level-up happened.
pub fn apply_xp(record: &mut MemberRecord, amount: u64) -> Option<u32> {
    record.exp = record.exp.saturating_add(amount);

    if record.exp < record.exp_threshold() {
        return None;
    }

    record.level = record.level.saturating_add(1);
    record.exp = 0;
    Some(record.level)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{CHAT_XP_RANGE, XpSource, apply_xp, roll_chat_xp};
    use hearth_database::{MemberRecord, MemberSnapshot};

    fn record_at(level: u32, exp: u64) -> MemberRecord {
        let mut record = MemberRecord::new(&MemberSnapshot {
            id: 1,
            username: "tester".to_owned(),
            ..Default::default()
        });
        record.level = level;
        record.exp = exp;
        record
    }

    #[test]
    fn gain_below_threshold_accumulates() {
        let mut record = record_at(1, 40);

        assert_eq!(apply_xp(&mut record, 59), None);
        assert_eq!((record.level, record.exp), (1, 99));
    }

    #[test]
    fn reaching_threshold_levels_up_and_resets() {
        let mut record = record_at(3, 250);

        assert_eq!(apply_xp(&mut record, 50), Some(4));
        assert_eq!((record.level, record.exp), (4, 0));
    }

    #[test]
    fn huge_gain_levels_up_only_once() {
        let mut record = record_at(1, 0);

        assert_eq!(apply_xp(&mut record, 10_000), Some(2));
        assert_eq!((record.level, record.exp), (2, 0));
    }

    #[test]
    fn three_messages_of_45_xp_discard_the_surplus() {
        let mut record = record_at(1, 0);

        let level_ups: Vec<_> = (0..3).filter_map(|_| apply_xp(&mut record, 45)).collect();

        assert_eq!(level_ups, vec![2]);
        assert_eq!((record.level, record.exp), (2, 0));
    }

    #[test]
    fn chat_rolls_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            assert!(CHAT_XP_RANGE.contains(&roll_chat_xp(&mut rng)));
        }
    }

    #[test]
    fn source_labels() {
        assert_eq!(XpSource::Chat.label(), "Chat");
        assert_eq!(XpSource::Voice.label(), "Voice");
    }

    proptest! {
        #[test]
        fn at_most_one_level_up_per_application(
            level in 1u32..500,
            exp_fraction in 0u64..100,
            gain in 0u64..1_000_000,
        ) {
            let start_exp = u64::from(level) * exp_fraction;
            let mut record = record_at(level, start_exp);

            match apply_xp(&mut record, gain) {
                Some(new_level) => {
                    prop_assert_eq!(new_level, level + 1);
                    prop_assert_eq!(record.level, level + 1);
                    prop_assert_eq!(record.exp, 0);
                }
                None => {
                    prop_assert_eq!(record.level, level);
                    prop_assert_eq!(record.exp, start_exp + gain);
                }
            }
            prop_assert!(record.exp < record.exp_threshold());
        }
    }
}
