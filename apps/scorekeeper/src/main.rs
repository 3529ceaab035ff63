use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use scorekeeper::config::demo::DemoConfig;
use scorekeeper::domain::{bonus_eligible, GameSession, Phase, PlayerId};
use scorekeeper::{RegistryError, SessionId, SessionRegistry};
use tracing::info;

mod telemetry;

fn main() {
    telemetry::init_tracing();

    // Environment variables are optional; see DemoConfig::from_env for defaults.
    let config = match DemoConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let registry = SessionRegistry::new();
    let session_id = match registry.create_with(config.rules) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("❌ Failed to create session: {e}");
            std::process::exit(1);
        }
    };

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    if let Err(e) = play(&registry, session_id, &config.players, &mut rng) {
        eprintln!("❌ Demo game aborted: {e}");
        std::process::exit(1);
    }

    let snapshot = match registry.with_session(session_id, |s| Ok(s.snapshot())) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("❌ Failed to serialize snapshot: {e}");
            std::process::exit(1);
        }
    }
}

/// Play a full game with random bids and results.
fn play(
    registry: &SessionRegistry,
    id: SessionId,
    names: &[String],
    rng: &mut ChaCha8Rng,
) -> Result<(), RegistryError> {
    let players: Vec<PlayerId> = registry.with_session(id, |s| {
        names
            .iter()
            .map(|name| s.add_player(name).map(|p| p.id))
            .collect()
    })?;
    registry.with_session(id, GameSession::start_game)?;

    loop {
        let (phase, hands) =
            registry.with_session(id, |s| Ok((s.current_phase(), s.hands_in_round())))?;
        match phase {
            Phase::Setup => {
                registry.with_session(id, GameSession::advance_phase)?;
            }
            Phase::Bidding => {
                for player in &players {
                    let bid = rng.random_range(0..=i32::from(hands));
                    registry.with_session(id, |s| s.submit_bid(*player, bid))?;
                }
                registry.with_session(id, GameSession::advance_phase)?;
            }
            Phase::Scoring => {
                for player in &players {
                    let tricks = rng.random_range(0..=i32::from(hands));
                    let bid = registry.with_session(id, |s| Ok(s.bid_for(*player).unwrap_or(0)))?;
                    let bonus = if bonus_eligible(bid, tricks) && rng.random_bool(0.25) {
                        10 * rng.random_range(1..=3)
                    } else {
                        0
                    };
                    registry.with_session(id, |s| s.submit_round_result(*player, tricks, bonus))?;
                }
                let change = registry.with_session(id, GameSession::advance_phase)?;
                info!(round = change.round, to = %change.to, "round finished");
            }
            Phase::Complete => return Ok(()),
        }
    }
}
