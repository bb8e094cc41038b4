use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use timed_quiz::db::{self, scores::best_score};
use timed_quiz::{logger, spawn_loader, ui, App, Config, Intent, SessionState};
use tokio::sync::mpsc::{self, UnboundedReceiver};

#[tokio::main]
async fn main() -> io::Result<()> {
    let config = Config::from_env();

    if let Err(e) = logger::init(&config.log_path(), &config.log_filter) {
        eprintln!("Logging disabled: {}", e);
    }
    tracing::info!(source = ?config.source, seconds = config.session_seconds, "starting quiz");

    let conn = match db::init_db(&config.db_path()) {
        Ok(conn) => Some(conn),
        Err(e) => {
            tracing::error!(error = %e, "score database unavailable");
            None
        }
    };
    let high_score = conn
        .as_ref()
        .and_then(|conn| best_score(conn).ok())
        .unwrap_or(0);

    let provider = config.provider();
    let mut app = App::new(
        SessionState::new(config.session_seconds, high_score),
        provider.describe(),
        conn,
    );

    let (tx, rx) = mpsc::unbounded_channel();
    let loader = spawn_loader(provider, config.shuffle, tx);

    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            loader.abort();
            tracing::error!(error = %e, "terminal setup failed");
            return Err(e);
        }
    };

    let result = run(&mut terminal, &mut app, rx).await;
    loader.abort();
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "quiz stopped on terminal error");
    }
    tracing::info!(high_score = app.state.high_score, "quiz closed");
    result
}

/// Enter raw mode and the alternate screen, undoing both if any step fails.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let entered = execute!(io::stdout(), EnterAlternateScreen)
        .and_then(|_| Terminal::new(CrosstermBackend::new(io::stdout())));
    if entered.is_err() {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
    entered
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    let raw = disable_raw_mode();
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    raw
}

async fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut loaded: UnboundedReceiver<Intent>,
) -> io::Result<()> {
    let mut events = EventStream::new();

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key) {
                        return Ok(());
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e),
                None => return Ok(()),
            },
            Some(intent) = loaded.recv() => app.dispatch(intent),
            _ = app.countdown_mut().tick() => app.on_tick(),
        }
    }
}
