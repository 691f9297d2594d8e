//! Astro Blaster headless runner
//!
//! Plays sessions with a scripted pilot and logs a HUD line through the
//! log renderer. Usage: `astro-blaster [seed] [tuning.json]`.

use astro_blaster::persistence::FileLeaderboard;
use astro_blaster::platform::{Clock, FixedClock, InputCommand, command_for_click, command_for_key};
use astro_blaster::renderer::{AssetStatus, LogRenderer, Renderer};
use astro_blaster::sim::World;
use astro_blaster::{Game, GamePhase, Leaderboard, NameFilter, Tuning, WordListFilter};

/// Frames per session before the runner gives up on the pilot dying
const MAX_FRAMES: u64 = 60 * 60 * 5;
const SESSIONS: u32 = 2;

/// Steer toward the nearest obstacle's lane and fire when lined up
fn autopilot(world: &World) -> Vec<InputCommand> {
    let ship = world.ship.position;
    let Some(target) = world
        .obstacles
        .iter()
        .filter(|o| o.position.z < ship.z)
        .max_by(|a, b| a.position.z.total_cmp(&b.position.z))
    else {
        return ["a", "d", "w", "s"]
            .iter()
            .filter_map(|k| command_for_key(k, false))
            .collect();
    };

    let dx = target.position.x - ship.x;
    let dy = target.position.y - ship.y;
    let mut commands = Vec::new();
    let mut steer = |less: &str, more: &str, delta: f32| {
        commands.extend(command_for_key(less, delta < -0.2));
        commands.extend(command_for_key(more, delta > 0.2));
    };
    steer("ArrowLeft", "ArrowRight", dx);
    steer("ArrowDown", "ArrowUp", dy);

    if dx.abs() < 0.5 && dy.abs() < 0.5 && world.frames % 6 == 0 {
        commands.push(command_for_click());
    }
    commands
}

fn run_session<L: Leaderboard, F: NameFilter>(
    game: &mut Game<L, F>,
    clock: &mut impl Clock,
    renderer: &mut impl Renderer,
) {
    for _ in 0..MAX_FRAMES {
        if let Some(world) = game.world() {
            for command in autopilot(world) {
                game.apply(command);
            }
        }
        game.frame(clock.tick());
        renderer.draw(&game.snapshot());
        if game.phase() != GamePhase::Playing {
            break;
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Astro Blaster (headless) starting...");

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0x5EED);
    let tuning = match args.next() {
        Some(path) => match Tuning::load(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("{}; using default tuning", e);
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };

    let leaderboard = FileLeaderboard::new(std::env::temp_dir().join("astro-blaster-scores.json"));
    let filter = WordListFilter::new(["darn", "heck"]);
    let mut game = match Game::new(tuning, seed, leaderboard, filter) {
        Ok(game) => game,
        Err(e) => {
            log::error!("{}", e);
            return;
        }
    };
    let mut clock = FixedClock::sixty_hz();
    let mut renderer = LogRenderer::new(120);

    // No mesh in headless mode
    game.set_ship_asset(AssetStatus::Failed("headless runner has no renderer".to_string()));

    for session in 0..SESSIONS {
        let started = if session == 0 { game.start() } else { game.restart() };
        if let Err(e) = started {
            log::error!("{}", e);
            return;
        }
        run_session(&mut game, &mut clock, &mut renderer);

        match game.phase() {
            GamePhase::Defeated => {
                if let Err(e) = game.submit_name("Autopilot") {
                    log::error!("{}", e);
                    return;
                }
            }
            phase => {
                log::info!("Session ended without defeat ({:?})", phase);
                return;
            }
        }

        if let Some(run) = game.last_run() {
            println!(
                "Session {}: score {} in {} ({} waves)",
                session + 1,
                run.score,
                astro_blaster::highscores::format_elapsed(run.elapsed_secs),
                run.waves
            );
        }
    }

    println!("\nLeaderboard:");
    for (rank, entry) in game.top_scores().iter().enumerate() {
        println!(
            "{:>2}. {:<16} {:>6}  {}",
            rank + 1,
            entry.name,
            entry.score,
            astro_blaster::highscores::format_elapsed(entry.elapsed_secs)
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web host drives `Game` directly
}
