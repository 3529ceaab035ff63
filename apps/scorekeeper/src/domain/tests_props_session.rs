//! Property tests over random operation sequences (pure domain).
//!
//! Whatever the callers throw at a session, the roster invariant, the round
//! bookkeeping and the no-partial-mutation rule must hold.

use proptest::prelude::*;

use crate::domain::session::GameSession;
use crate::domain::state::{Phase, PlayerId};
use crate::domain::test_prelude;

#[derive(Debug, Clone)]
enum Op {
    Add(u8),
    Remove(u32),
    Start,
    Bid(u32, i32),
    Score(u32, i32, i32),
    Advance,
    Transition(Phase),
}

fn phase() -> impl Strategy<Value = Phase> {
    prop_oneof![
        Just(Phase::Setup),
        Just(Phase::Bidding),
        Just(Phase::Scoring),
        Just(Phase::Complete),
    ]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..12).prop_map(Op::Add),
        (1u32..12).prop_map(Op::Remove),
        Just(Op::Start),
        (1u32..10, -1i32..12).prop_map(|(p, b)| Op::Bid(p, b)),
        (1u32..10, -1i32..12, 0i32..3).prop_map(|(p, t, b)| Op::Score(p, t, b * 10)),
        Just(Op::Advance),
        phase().prop_map(Op::Transition),
    ]
}

fn apply(session: &mut GameSession, op: &Op) -> bool {
    match op {
        Op::Add(n) => session.add_player(&format!("Player {n}")).is_ok(),
        Op::Remove(id) => session.remove_player(PlayerId(*id)).is_ok(),
        Op::Start => session.start_game().is_ok(),
        Op::Bid(id, bid) => session.submit_bid(PlayerId(*id), *bid).is_ok(),
        Op::Score(id, tricks, bonus) => session
            .submit_round_result(PlayerId(*id), *tricks, *bonus)
            .is_ok(),
        Op::Advance => session.advance_phase().is_ok(),
        Op::Transition(target) => session.transition(*target).is_ok(),
    }
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: a started session always has between 2 and 8 players.
    #[test]
    fn prop_started_roster_within_bounds(ops in prop::collection::vec(op(), 1..80)) {
        let mut session = GameSession::new();
        for op in &ops {
            apply(&mut session, op);
            if session.view().started {
                let n = session.players().len();
                prop_assert!((2..=8).contains(&n), "started with {n} players");
            }
        }
    }

    /// Property: failed operations leave the session untouched.
    #[test]
    fn prop_failed_ops_do_not_mutate(ops in prop::collection::vec(op(), 1..80)) {
        let mut session = GameSession::new();
        for op in &ops {
            let before = serde_json::to_value(session.snapshot()).unwrap();
            if !apply(&mut session, op) {
                let after = serde_json::to_value(session.snapshot()).unwrap();
                prop_assert_eq!(before, after, "failed {:?} mutated the session", op);
            }
        }
    }

    /// Property: rounds never go backwards and completed rounds stay in 1..=current.
    #[test]
    fn prop_round_bookkeeping(ops in prop::collection::vec(op(), 1..120)) {
        let mut session = GameSession::new();
        let mut last_round = session.current_round();
        for op in &ops {
            apply(&mut session, op);
            let progress = session.progress();
            prop_assert!(progress.current >= last_round);
            prop_assert!(progress.completed <= progress.current);
            prop_assert_eq!(session.hands_in_round(), progress.current);
            last_round = progress.current;
        }
    }
}
