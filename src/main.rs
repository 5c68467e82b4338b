mod app;
mod cli;
mod client;
mod config;
mod error;
mod filter;
mod gate;
mod handler;
mod input;
mod logging;
mod model;
mod nav;
mod output;
mod render;
mod slots;
mod text_edit;
mod theme;
mod ui;
mod validate;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use app::App;
use client::{CompareClient, CompareReply, CompareWorker, HttpTransport};
use config::{Settings, load_config};
use input::map_key_to_action;
use model::SlotId;
use slots::DropOrigin;
use theme::resolve_theme;

fn main() -> anyhow::Result<()> {
    let cli_args = cli::parse_cli_args();
    let log_path = logging::init_logging();

    let config_outcome = match load_config() {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {e}");
            Default::default()
        }
    };
    for warning in &config_outcome.warnings {
        eprintln!("{warning}");
    }

    let (settings, theme_warnings) = Settings::resolve(&cli_args, config_outcome.config.as_ref());
    for warning in &theme_warnings {
        eprintln!("{warning}");
    }
    log::info!(
        "doccmp {} starting: server={} export_dir={} timeout={:?} theme={}",
        env!("CARGO_PKG_VERSION"),
        settings.server,
        settings.export_dir.display(),
        settings.timeout,
        settings.theme.name()
    );

    let worker = CompareWorker::spawn(CompareClient::new(
        HttpTransport::new(settings.timeout),
        settings.csrf_token.clone(),
    ));

    let mut app = App::new(resolve_theme(settings.theme), settings);
    for (slot, path) in [
        (SlotId::Original, &cli_args.original),
        (SlotId::Modified, &cli_args.modified),
    ] {
        if let Some(path) = path {
            app.drop_file(slot, path, DropOrigin::Drop);
        }
    }
    if app.message.is_none()
        && let Some(path) = &log_path
    {
        app.set_message(format!("Logging to {}", path.display()));
    }

    // Setup panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(io::stdout(), DisableBracketedPaste);
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, &worker);

    let _ = execute!(terminal.backend_mut(), DisableBracketedPaste);
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!("doccmp exiting");
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    worker: &CompareWorker,
) -> anyhow::Result<()> {
    loop {
        if let Some(job) = app.take_pending_job() {
            let generation = job.generation;
            if let Err(e) = worker.request(job) {
                app.finish_compare(CompareReply {
                    generation,
                    outcome: Err(e),
                });
            }
        }
        while let Some(reply) = worker.try_recv() {
            app.finish_compare(reply);
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let action = map_key_to_action(key, app.input_mode);
                    handler::dispatch(app, action);
                }
                Event::Paste(text) => handler::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
