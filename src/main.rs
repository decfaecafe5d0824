use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Instant;
use vocab_cards::{
    db::init_db, draw_app, logger, spawn_seed_worker, App, Config, JsonFileSeed, SeedEvent,
    WordStore,
};

fn main() -> io::Result<()> {
    let config = Config::default();
    logger::init(&config.log_path);
    logger::log("Starting vocab-cards");

    let conn = init_db(&config.db_path).map_err(io::Error::other)?;
    let mut store = WordStore::open(conn, &config.storage_key).map_err(io::Error::other)?;

    let (seed_tx, seed_rx) = crossbeam_channel::bounded::<SeedEvent>(1);
    let mut seeding = false;
    if store.needs_seed() {
        let source = JsonFileSeed::new(config.seed_path.clone());
        match spawn_seed_worker(Box::new(source.clone()), seed_tx) {
            Ok(_) => seeding = true,
            Err(e) => {
                logger::error(&format!("Failed to spawn seed worker: {}", e));
                if let Err(e) = store.seed_from(&source) {
                    logger::error(&format!("Could not save starter words: {}", e));
                }
            }
        }
    } else {
        drop(seed_tx);
    }

    let mut app = App::new(config, store);
    if seeding {
        app.begin_seeding();
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, &seed_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        logger::error(&format!("Exited with error: {}", e));
    }
    logger::log("Exiting vocab-cards");
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    seed_rx: &crossbeam_channel::Receiver<SeedEvent>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| draw_app(f, app))?;

        if let Ok(event) = seed_rx.try_recv() {
            app.on_seed_event(event);
        }

        if event::poll(app.config.tick_rate)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key, Instant::now());
        }

        app.tick(Instant::now());

        if app.should_quit {
            return Ok(());
        }
    }
}
