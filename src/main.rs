//! Asteroid Drift entry point
//!
//! On the web, sets up the canvas and waits for `startGame()`. Natively,
//! plays one headless session with no input and prints the outcome.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

    log::info!("Asteroid Drift starting...");
    if let Err(e) = asteroid_drift::platform::web::init() {
        log::error!("Failed to initialize: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Frames per simulated second in headless runs
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_FPS: u32 = 60;
/// Give up on a headless run after this long
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_MAX_SECONDS: u32 = 600;

/// Usage: `asteroid-drift [settings.json] [seed]`
#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use std::process::ExitCode;

    use asteroid_drift::platform::{HeadlessHost, headless};
    use asteroid_drift::renderer::DrawStats;
    use asteroid_drift::sim::Arena;
    use asteroid_drift::{Session, Settings};

    env_logger::init();
    log::info!("Asteroid Drift (native) starting headless run...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => match Settings::from_file(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };
    let seed = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::error!("invalid seed: {}", e);
            return ExitCode::FAILURE;
        }
        None => std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default(),
    };

    let arena = Arena::new(settings.arena.width, settings.arena.height);
    let mut session = Session::new(settings, arena, HeadlessHost::new(), seed);
    session.start();

    let mut stats = DrawStats::new();
    let report = headless::run(&mut session, &mut stats, HEADLESS_FPS, HEADLESS_MAX_SECONDS);
    log::info!(
        "{} frames simulated, {} primitives drawn",
        session.state().frames,
        stats.primitives()
    );

    match report {
        Some(report) => match serde_json::to_string(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                log::error!("failed to encode report: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => println!("Still alive after {}s", session.state().score),
    }

    ExitCode::SUCCESS
}
