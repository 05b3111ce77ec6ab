use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use flipdeck::{
    app::App,
    app_dirs::AppDirs,
    config::{ConfigStore, FileConfigStore},
    deck::DeckCache,
    runtime::{AppEvent, CrosstermEventSource, EventSource, Runner},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    fs::{self, File, OpenOptions},
    io::{self, stdin},
    panic,
    path::{Path, PathBuf},
    sync::Mutex,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "FLIPDECK_LOG";

/// minimal flashcard review tui
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Step through a deck of question/answer cards loaded from a headerless two-column CSV file. Reveal the answer when you are ready, then move on; navigation wraps around the deck."
)]
pub struct Cli {
    /// csv file with one `question,answer` pair per row (no header)
    deck: Option<PathBuf>,

    /// title shown above the cards
    #[clap(short = 't', long)]
    title: Option<String>,

    /// card to start on (1-based, wraps around the deck)
    #[clap(short = 's', long, default_value_t = 1)]
    start: usize,

    /// write logs to this file instead of the default state directory
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// remember the deck and title for future runs
    #[clap(long)]
    save_config: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.log_file.clone());

    let store = FileConfigStore::new();
    let mut config = store.load();
    let deck_path = config.resolve_deck(cli.deck.as_deref());
    if let Some(title) = &cli.title {
        config.title = title.clone();
    }

    let mut decks = DeckCache::new();
    let deck = match decks.load(&deck_path) {
        Ok(deck) => deck,
        Err(e) => {
            error!(path = %deck_path.display(), error = %e, "cannot start session");
            let mut cmd = Cli::command();
            cmd.error(ErrorKind::Io, e).exit();
        }
    };

    if cli.save_config {
        config.deck = Some(deck_path.clone());
        store.save(&config)?;
        info!(path = %store.path().display(), "config saved");
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let mut app = App::starting_at(config.title, deck, cli.start.saturating_sub(1));
    info!(
        deck = %deck_path.display(),
        cards = app.session.len(),
        start = app.session.index(),
        "session started"
    );

    // Restore the terminal before a panic message is printed
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let runner = Runner::new(CrosstermEventSource::new());
    let result = start_tui(&mut terminal, &mut app, &runner);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(last_card = app.session.index(), "session ended");
    result
}

fn init_logging(path: Option<PathBuf>) {
    // the terminal is in raw mode, so logs only ever go to a file
    let Some(path) = path.or_else(AppDirs::log_path) else {
        return;
    };
    let file = match open_log_file(&path) {
        Ok(file) => file,
        Err(e) => {
            // still on the normal screen here, so this is visible
            eprintln!("flipdeck: logging disabled, cannot open {}: {e}", path.display());
            return;
        }
    };

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn start_tui<B: Backend, E: EventSource>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E>,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| ui(app, f))?;

    while let Some(event) = runner.step() {
        match event {
            AppEvent::Resize => {
                terminal.draw(|f| ui(app, f))?;
            }
            AppEvent::Key(key) => {
                if app.on_key(key) {
                    terminal.draw(|f| ui(app, f))?;
                }
                if app.should_quit {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn ui(app: &App, f: &mut Frame) {
    f.render_widget(app, f.area());
}
