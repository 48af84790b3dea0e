mod display;

use std::error::Error;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use gravity_flip::{Driver, GameConfig, InputEvent, RandomOrientation, Schedule};

use display::{present, Canvas, TerminalHud};

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

const CONFIG_ENV: &str = "GRAVITY_FLIP_CONFIG";
const LOG_FILE: &str = "gravity_flip.log";

// ── Input mapping ─────────────────────────────────────────────────────────────

enum Command {
    Game(InputEvent),
    Quit,
    Ignore,
}

fn translate(ev: Event) -> Command {
    match ev {
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            modifiers,
            ..
        }) => match code {
            KeyCode::Char(' ') => Command::Game(InputEvent::Flip),
            KeyCode::Enter => Command::Game(InputEvent::Start),
            KeyCode::Char('r') | KeyCode::Char('R') => Command::Game(InputEvent::Restart),
            KeyCode::Char('s') | KeyCode::Char('S') => Command::Game(InputEvent::Share),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
            _ => Command::Ignore,
        },
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            ..
        }) => Command::Game(InputEvent::Flip),
        _ => Command::Ignore,
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

/// Logs go to a file; stderr would scribble over the alternate screen.
fn init_logging() {
    let path = std::env::temp_dir().join(LOG_FILE);
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Ok(file) = File::create(&path) {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
}

/// First CLI argument, else `GRAVITY_FLIP_CONFIG`, else built-in defaults.
fn load_config() -> Result<GameConfig, gravity_flip::ConfigError> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_ENV).ok())
        .map(PathBuf::from);
    let config = match path {
        Some(path) => GameConfig::load(&path)?,
        None => GameConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

// ── Host loop ─────────────────────────────────────────────────────────────────

/// Owns the frame timer. While the driver answers `Schedule::Next` a frame
/// runs every `FRAME`; otherwise the loop sleeps on the input channel.
fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: GameConfig,
) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    let mut canvas = Canvas::new(config.viewport_width, config.viewport_height, width, height);
    let mut hud = TerminalHud::new();
    let mut driver = Driver::new(config, RandomOrientation(thread_rng()));

    driver.sync_hud(&mut hud);
    present(out, &canvas, &hud)?;

    let mut schedule = Schedule::Stop;
    loop {
        let frame_start = Instant::now();

        // Idle screens wait for input instead of spinning
        if schedule == Schedule::Stop {
            match rx.recv() {
                Ok(ev) => match translate(ev) {
                    Command::Game(input) => driver.enqueue(input),
                    Command::Quit => return Ok(()),
                    Command::Ignore => {}
                },
                Err(_) => return Ok(()),
            }
        }

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match translate(ev) {
                Command::Game(input) => driver.enqueue(input),
                Command::Quit => return Ok(()),
                Command::Ignore => {}
            }
        }

        let (width, height) = terminal::size()?;
        canvas.resize(width, height);

        schedule = driver.apply_pending(&mut hud);
        if schedule == Schedule::Next {
            schedule = driver.frame(&mut canvas, &mut hud);
        }
        present(out, &canvas, &hud)?;

        if schedule == Schedule::Next {
            let elapsed = frame_start.elapsed();
            if elapsed < FRAME {
                std::thread::sleep(FRAME - elapsed);
            }
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    let config = load_config()?;
    log::info!("starting with {:?}", config);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, &rx, config);

    // Always restore the terminal
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        log::error!("terminal error: {}", e);
    }
    result.map_err(Into::into)
}
