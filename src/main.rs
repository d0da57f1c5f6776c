use std::io;
use std::time::Duration;

use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use log::{debug, info, warn};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use ufo_hunter::app::App;
use ufo_hunter::config::Settings;
use ufo_hunter::event::{Event, EventHandler};
use ufo_hunter::sound::TerminalSounds;
use ufo_hunter::ui::{self, Viewport};

type Term = Terminal<CrosstermBackend<io::Stdout>>;

fn main() -> io::Result<()> {
    // Settings first: they name the log file.
    let path = Settings::config_path();
    let loaded = Settings::load_from(&path);
    let settings = match &loaded {
        Ok(Some(settings)) => settings.clone(),
        _ => Settings::default(),
    };
    if let Err(e) = simple_logging::log_to_file(&settings.log_file, settings.log_level_filter()) {
        eprintln!("could not open log file {}: {}", settings.log_file, e);
    }
    match loaded {
        Ok(Some(_)) => info!("settings loaded from {}", path.display()),
        Ok(None) => info!("no {} found, using defaults", path.display()),
        Err(e) => warn!("{}; using defaults", e),
    }

    let bell = settings.bell;
    let mut app = App::new(settings, Box::new(TerminalSounds::new(bell)))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    app.set_release_events(enhanced);
    info!("key release events: {}", enhanced);

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let event_handler = EventHandler::new(Duration::from_secs_f32(app.settings().dt()));
    let result = run(&mut terminal, &mut app, &event_handler);

    // Restore terminal
    if enhanced {
        let _ = execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags);
    }
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Term, app: &mut App, events: &EventHandler) -> io::Result<()> {
    let mut viewport = Viewport::default();
    terminal.draw(|frame| ui::render(frame, app, &mut viewport))?;

    loop {
        match events.next()? {
            Event::Tick => {
                app.tick();
                terminal.draw(|frame| ui::render(frame, app, &mut viewport))?;
            }
            Event::Key(key) => app.on_key(key),
            Event::Mouse(mouse) => {
                if let Some((x, y)) = viewport.to_canvas(mouse.column, mouse.row) {
                    app.on_pointer(x, y);
                }
            }
            // The next frame picks up the new size.
            Event::Resize(w, h) => debug!("terminal resized to {}x{}", w, h),
        }

        if app.should_quit {
            info!("quitting at level {} with score {}", app.progress().level, app.progress().score);
            return Ok(());
        }
    }
}
