use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, SimpleLogger, TermLogger, TerminalMode};

use rand::rngs::StdRng;
use rand::SeedableRng;
use snake_sim::basic::Seconds;
use snake_sim::error::{Error, ErrorConversion, Result};
use snake_sim::food::spawn::SpawnPolicy;
use snake_sim::game::{Game, State};
use snake_sim::prefs::Prefs;
use snake_sim::snake_control::{seeker::preferred_dirs, AxisPriority};

const FRAME: Seconds = 1. / 60.;

/// Steers the player towards the food, the way a human pressing
/// arrow keys at the right moment would
fn autopilot(game: &mut Game) {
    let (Some(head), Some(food)) = (game.player().head(), game.food().copied()) else {
        return;
    };
    let dir = game.player().dir();
    if let Some(turn) =
        preferred_dirs(head, food.pos, AxisPriority::HorizontalFirst).find(|d| !d.is_opposite(dir))
    {
        game.request_turn(turn.into());
    }
}

fn main() -> Result {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .or_else(|_| SimpleLogger::init(LevelFilter::Info, Config::default()))
    .map_err(Error::from)
    .with_trace_step("logger setup")?;

    let mut args = std::env::args().skip(1);
    let seconds: Seconds = args.next().and_then(|s| s.parse().ok()).unwrap_or(60.);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0);

    info!("running a {}s headless match with seed {}", seconds, seed);
    let mut game = Game::with_spawn_policy(Prefs::default(), SpawnPolicy::Random, StdRng::seed_from_u64(seed))
        .with_trace_step("main")?;
    game.start();

    let frames = (seconds / FRAME) as usize;
    for _ in 0..frames {
        autopilot(&mut game);
        game.update(FRAME);
        if game.state() == State::Over {
            break;
        }
    }

    info!(
        "final score {} (player length {}, enemy length {})",
        game.score_text(),
        game.player().len(),
        game.enemy().len()
    );
    Ok(())
}
