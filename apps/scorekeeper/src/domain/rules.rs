use std::ops::RangeInclusive;

// Round r deals r hands, for r in 1..=max_rounds.
pub fn hands_for_round(round_no: u8, max_rounds: u8) -> Option<u8> {
    if round_no == 0 || round_no > max_rounds {
        return None;
    }
    Some(round_no)
}

pub fn valid_bid_range(hands_in_round: u8) -> RangeInclusive<i32> {
    0..=i32::from(hands_in_round)
}
