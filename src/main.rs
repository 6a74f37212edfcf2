use anyhow::Context;
use clap::Parser;
use crossbeam_channel::{Receiver, Sender};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use quiz_client::{
    api::{ApiRequest, ApiResponse, HttpTransport, QuizApi},
    api_worker::spawn_api_worker,
    config::Config,
    input::{handle_key, KeyOutcome},
    logger, ui, QuizFlow,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

struct Channels {
    requests: Sender<ApiRequest>,
    responses: Receiver<ApiResponse>,
    alerts: Receiver<String>,
}

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "env-file")]
    let _ = dotenvy::dotenv();

    let config = Config::parse();
    logger::init(&config.log_file);
    logger::log(&format!("Starting quiz client against {}", config.base_url));

    let (request_tx, request_rx) = crossbeam_channel::unbounded();
    let (response_tx, response_rx) = crossbeam_channel::unbounded();
    let (alert_tx, alert_rx) = crossbeam_channel::unbounded::<String>();

    let api = QuizApi::new(
        config.base_url.clone(),
        Arc::new(HttpTransport::new()),
        Arc::new(alert_tx),
    );
    let worker = spawn_api_worker(api, request_rx, response_tx)
        .context("failed to start the API worker")?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let channels = Channels {
        requests: request_tx,
        responses: response_rx,
        alerts: alert_rx,
    };
    let result = run(&mut terminal, &channels);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // An in-flight request may never return; the worker is not joined.
    drop(channels);
    if worker.is_finished() {
        logger::log("API worker already stopped");
    }
    logger::log("Quiz client exited");

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    channels: &Channels,
) -> anyhow::Result<()> {
    let mut flow = QuizFlow::new();
    send(channels, flow.start())?;

    loop {
        terminal.draw(|f| ui::draw(f, &flow))?;

        while let Ok(message) = channels.alerts.try_recv() {
            flow.push_alert(message);
        }
        while let Ok(response) = channels.responses.try_recv() {
            let follow_up = flow.handle_response(response);
            send(channels, follow_up)?;
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match handle_key(&mut flow, key) {
                KeyOutcome::Continue => {}
                KeyOutcome::Request(request) => send(channels, Some(request))?,
                KeyOutcome::Quit => break,
            }
        }
    }

    Ok(())
}

fn send(channels: &Channels, request: Option<ApiRequest>) -> anyhow::Result<()> {
    if let Some(request) = request {
        channels
            .requests
            .send(request)
            .context("API worker stopped")?;
    }
    Ok(())
}
