use crate::config::GameRules;
use crate::domain::phase_machine::PhaseMachine;
use crate::domain::state::{Phase, PlayerId};

/// Machine in Setup with the given players added (not started).
pub fn machine_with_players(names: &[&str]) -> PhaseMachine {
    machine_with_rules(GameRules::default(), names)
}

pub fn machine_with_rules(rules: GameRules, names: &[&str]) -> PhaseMachine {
    let mut machine = PhaseMachine::new(rules);
    for name in names {
        machine.add_player(name).expect("valid test player");
    }
    machine
}

pub fn player_ids(machine: &PhaseMachine) -> Vec<PlayerId> {
    machine.roster().players().iter().map(|p| p.id).collect()
}

/// Started machine in Bidding for round 1.
pub fn machine_in_bidding(names: &[&str]) -> PhaseMachine {
    let mut machine = machine_with_players(names);
    machine.transition(Phase::Bidding).expect("start bidding");
    machine
}

/// Machine in Scoring for the current round, every player having bid `bid`.
pub fn machine_in_scoring(names: &[&str], bid: i32) -> PhaseMachine {
    let mut machine = machine_in_bidding(names);
    for id in player_ids(&machine) {
        machine.record_bid(id, bid).expect("bid in range");
    }
    machine.transition(Phase::Scoring).expect("start scoring");
    machine
}

/// Play one full round where everyone bids 0 and takes 0 tricks.
pub fn play_zero_round(machine: &mut PhaseMachine) -> Phase {
    if machine.phase() == Phase::Setup {
        machine.transition(Phase::Bidding).expect("open bidding");
    }
    let ids = player_ids(machine);
    for id in &ids {
        machine.record_bid(*id, 0).expect("bid");
    }
    machine.transition(Phase::Scoring).expect("open scoring");
    for id in &ids {
        machine.record_score(*id, 0, 0).expect("score");
    }
    machine.advance_phase().expect("finish round")
}
