pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod logging;
pub mod ui;

use std::io::{self, Stdout};

use anyhow::Result;
use app::events::{AppEvent, spawn_input_task};
use app::state::{AppMode, AppState};
use cli::Cli;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

pub async fn run(cli: Cli) -> Result<()> {
    if cli.one_shot {
        return one_shot(&cli).await;
    }

    let mut terminal = setup_terminal()?;
    let result = run_inner(&mut terminal, cli).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run_inner(terminal: &mut Terminal<CrosstermBackend<Stdout>>, cli: Cli) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(256);
    let input_stream = spawn_input_task();
    tokio::pin!(input_stream);
    let mut app = AppState::new(&cli);

    tx.send(AppEvent::Bootstrap).await?;

    while app.running {
        tokio::select! {
            maybe_input = input_stream.next() => {
                if let Some(input) = maybe_input {
                    app.handle_event(AppEvent::Input(input), &tx, &cli).await?;
                }
            }
            maybe_event = rx.recv() => {
                if let Some(event) = maybe_event {
                    app.handle_event(event, &tx, &cli).await?;
                }
            }
        }

        terminal.draw(|frame| ui::render(frame, &app, &cli))?;

        if app.mode == AppMode::Quit {
            app.running = false;
        }
    }

    Ok(())
}

/// Non-interactive mode: one fetch, one snapshot on stdout, same fallback
/// rules as the tile.
async fn one_shot(cli: &Cli) -> Result<()> {
    use app::settings::pinned_units;
    use app::state::{fetch_observation, time_client, weather_client};
    use chrono::Local;
    use data::icons::AssetChain;
    use domain::{clock::format_moment, weather::Observation};

    let city = cli.default_city();
    let weather = weather_client(cli);
    let time = (!cli.no_time_lookup).then(|| time_client(cli));

    let observation = match fetch_observation(&weather, time.as_ref(), &city).await {
        Ok(observation) => observation,
        Err(err) => {
            tracing::warn!(city = %city, error = %err, "one-shot fetch failed, using fallback");
            Observation::fallback(&city)
        }
    };

    let units = pinned_units(cli).unwrap_or_else(|| observation.default_units());
    let moment = observation
        .local_time
        .unwrap_or_else(|| Local::now().naive_local());
    let icon = observation.icon();
    let assets = AssetChain::resolve(icon);

    println!(
        "{} · {} · {}{} · {}",
        observation.city,
        observation.condition_text,
        observation.temp(units),
        units.suffix(),
        format_moment(moment, cli.minute_style()),
    );
    println!("icon: {} ({})", icon, assets.current_url());
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let existing = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
        existing(panic);
    }));
}
