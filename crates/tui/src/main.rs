//! Pokedex terminal interface.
//!
//! Startup: parse flags, set up file logging, load configuration, build the
//! shared client, enter the alternate screen, then run the action loop until
//! `Action::Quit`.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use pokedex_client::{MetricsCollector, MetricsExporter, PokedexClient};
use pokedex_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};
use pokedex_config::{Config, ConfigLoader};
use pokedex_tui::action::{Action, RedactedAction};
use pokedex_tui::app::{App, AppSettings};
use pokedex_tui::cli::Cli;
use pokedex_tui::runtime::side_effects::{SharedClient, TaskTracker, handle_side_effects};
use pokedex_tui::runtime::terminal::TerminalGuard;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::sync::Arc;
use tokio::sync::mpsc::{Sender, channel, error::TrySendError};
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing so `.env` can provide clap defaults.
    let dotenv_error = ConfigLoader::new().load_dotenv().err();
    let cli = Cli::parse();
    let no_mouse = cli.no_mouse;

    // Log to a file: the terminal belongs to the UI.
    std::fs::create_dir_all(&cli.log_dir)
        .with_context(|| format!("Failed to create log directory {}", cli.log_dir.display()))?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "pokedex-tui.log");
    let (non_blocking, _log_guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();
    if let Some(e) = dotenv_error {
        tracing::warn!("Failed to load .env file: {}", e);
    }

    let _metrics_exporter = if let Some(ref bind_addr) = cli.metrics_bind {
        match MetricsExporter::install(bind_addr) {
            Ok(exporter) => Some(exporter),
            Err(e) => {
                tracing::error!("Failed to start metrics exporter: {}", e);
                None
            }
        }
    } else {
        None
    };
    let metrics_enabled = _metrics_exporter.is_some();

    let config = load_config(&cli)?;
    let client = build_client(&config, cli.no_cache, metrics_enabled)?;
    tracing::info!(base_url = %client.base_url(), "Client ready");

    let mut app = App::new(AppSettings::from_config(&config, cli.export_dir.clone()));
    let task_tracker = TaskTracker::new();

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if no_mouse {
        execute!(stdout, EnterAlternateScreen)?;
    } else {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let _terminal_guard = TerminalGuard::new(no_mouse);

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);
    spawn_input_task(tx.clone(), &task_tracker);

    handle_side_effects(
        Action::LoadHealth,
        client.clone(),
        tx.clone(),
        task_tracker.clone(),
    )
    .await;

    let frame_metrics = metrics_enabled.then(MetricsCollector::new);
    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(DEFAULT_UI_TICK_MS));

    'main: loop {
        let render_start = std::time::Instant::now();
        terminal.draw(|f| app.render(f))?;
        if let Some(m) = &frame_metrics {
            m.record_tui_frame_render_duration(render_start.elapsed());
        }

        let first = tokio::select! {
            Some(action) = rx.recv() => action,
            _ = tick_interval.tick() => Action::Tick,
        };

        // An action may produce a follow-up; run the chain to completion
        // before drawing again.
        let mut next = Some(first);
        while let Some(action) = next.take() {
            if !matches!(action, Action::Tick) {
                tracing::info!("Handling action: {:?}", RedactedAction(&action));
            }
            if matches!(action, Action::Quit) {
                break 'main;
            }
            next = app.update(action.clone());
            handle_side_effects(action, client.clone(), tx.clone(), task_tracker.clone()).await;
        }
    }

    // The input task never finishes on its own; it ends with the runtime.
    task_tracker.close();

    disable_raw_mode()?;
    if no_mouse {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    } else {
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
    }
    terminal.show_cursor()?;

    Ok(())
}

/// Load configuration: file, then environment, then flags.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new();
    // Blank values fall back to the env var or default path
    if let Some(path) = &cli.config_path
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }
    loader = loader.from_file()?.from_env()?;
    if let Some(url) = &cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if cli.no_cache {
        loader = loader.with_cache_enabled(false);
    }
    Ok(loader.build()?)
}

fn build_client(config: &Config, no_cache: bool, metrics_enabled: bool) -> Result<SharedClient> {
    let mut builder = PokedexClient::builder().from_config(config);
    if no_cache {
        builder = builder.no_cache();
    }
    if metrics_enabled {
        builder = builder.metrics(MetricsCollector::new());
    }
    let client = builder.build().context("Failed to build API client")?;
    Ok(Arc::new(client))
}

/// Forward terminal events into the action channel.
///
/// Keys and resizes are never dropped; mouse events are dropped when the
/// channel is full.
fn spawn_input_task(tx: Sender<Action>, task_tracker: &TaskTracker) {
    task_tracker.spawn(async move {
        let mut reader = EventStream::new();
        while let Some(event_result) = reader.next().await {
            let Ok(event) = event_result else {
                break;
            };
            match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if tx.send(Action::Input(key)).await.is_err() {
                        break;
                    }
                }
                Event::Resize(width, height) => {
                    if tx.send(Action::Resize(width, height)).await.is_err() {
                        break;
                    }
                }
                Event::Mouse(mouse) => match tx.try_send(Action::Mouse(mouse)) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        tracing::debug!("Input channel full, dropping mouse event");
                    }
                    Err(TrySendError::Closed(_)) => break,
                },
                _ => {}
            }
        }
    });
}
