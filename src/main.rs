use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::info;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use space_shooter::compute::{fire, tick};
use space_shooter::config::Config;
use space_shooter::display::TerminalSink;
use space_shooter::error::GameError;
use space_shooter::input::KeyTracker;
use space_shooter::render::render;
use space_shooter::session::{confirm, init_state};

// ── Logging ───────────────────────────────────────────────────────────────────

/// Raw mode owns the terminal, so logs go to a file when one is configured.
fn init_logging(config: &Config) -> Result<(), GameError> {
    match &config.log_file {
        Some(path) => {
            let file = File::create(path)?;
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        None => env_logger::init(),
    }
    Ok(())
}

fn load_config() -> Result<Config, GameError> {
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => Ok(Config::load(&path)?),
        None => Ok(Config::default()),
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Input model: one-shot actions (confirm, fire, quit) act on the press
/// event itself; held controls go through `KeyTracker`, which the tick
/// samples once per frame so Space + A/D can be held together.
fn game_loop<W: Write>(
    out: &mut W,
    config: &Config,
    rx: &mpsc::Receiver<Event>,
) -> Result<(), GameError> {
    let frame_time = Duration::from_millis(config.frame_ms);
    let seed = config.seed.unwrap_or_else(rand::random);
    info!("seed {}", seed);
    let mut rng = Pcg32::seed_from_u64(seed);

    let mut state = init_state(config.arena(), config.star_count, &mut rng);
    let mut keys = KeyTracker::new(config.hold_window);

    loop {
        let frame_start = Instant::now();
        keys.advance_frame();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = ev
            else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    keys.press(code);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(());
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Enter => confirm(&mut state, &mut rng),
                        KeyCode::Char(' ') => fire(&mut state),
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => keys.press(code),
                KeyEventKind::Release => keys.release(&code),
            }
        }

        tick(&mut state, &keys.input_state(), &mut rng);

        let (width, height) = terminal::size()?;
        render(&state, &mut TerminalSink::new(&mut *out, width, height))?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), GameError> {
    let config = load_config()?;
    init_logging(&config)?;
    info!("starting with arena {}x{}", config.arena.width, config.arena.height);

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Ask for release and repeat events; terminals without the protocol
    // fall back to the hold window.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Blocking reads live on their own thread so the frame loop never waits.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = game_loop(&mut out, &config, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        log::error!("{}", e);
    }
    result
}
