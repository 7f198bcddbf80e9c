use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::error;

use coinwatch::CoinwatchError;
use coinwatch::client::MarketClient;
use coinwatch::config::fetch_config;
use coinwatch::tui::{self, App, Message, event::Action};

#[tokio::main]
async fn main() -> Result<(), CoinwatchError> {
    init_logging();

    let app_config = fetch_config()?;
    let client = Arc::new(MarketClient::new(&app_config));

    let mut terminal = tui::setup_terminal()?;
    let result = run(&mut terminal, client).await;
    tui::restore_terminal(&mut terminal)?;

    result
}

/// Drives the draw/update loop until quit.
async fn run(terminal: &mut tui::Tui, client: Arc<MarketClient>) -> Result<(), CoinwatchError> {
    let (tx, mut rx) = mpsc::unbounded_channel();

    tui::event::spawn_event_reader(tx.clone());
    tui::event::spawn_tick_timer(tx.clone(), 250);
    spawn_market_fetch(client.clone(), tx.clone());

    let mut app = App::new();

    while !app.should_quit {
        terminal
            .draw(|frame| tui::render(frame, &app))
            .map_err(|e| CoinwatchError::Terminal(e.to_string()))?;

        let Some(message) = rx.recv().await else {
            break;
        };

        if let Some(action) = tui::event::update(&mut app, message) {
            match action {
                Action::OpenCoin(id) => spawn_detail_fetch(client.clone(), tx.clone(), id),
            }
        }
    }

    Ok(())
}

/// Spawns the one-shot market snapshot fetch.
///
/// Failures are logged and reported as a message; if the receiver is
/// already gone the result is simply discarded.
fn spawn_market_fetch(client: Arc<MarketClient>, tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        match client.fetch_cryptos().await {
            Ok(coins) => {
                let _ = tx.send(Message::Markets(coins));
            }
            Err(e) => {
                error!(error = %e, "failed to fetch market snapshot");
                let _ = tx.send(Message::MarketsFailed);
            }
        }
    });
}

/// Spawns the detail and chart fetches for one coin.
fn spawn_detail_fetch(client: Arc<MarketClient>, tx: mpsc::UnboundedSender<Message>, id: String) {
    {
        let client = client.clone();
        let tx = tx.clone();
        let id = id.clone();
        tokio::spawn(async move {
            match client.fetch_coin_data(&id).await {
                Ok(detail) => {
                    let _ = tx.send(Message::Detail(detail));
                }
                Err(e) => {
                    error!(coin = %id, error = %e, "failed to fetch coin detail");
                    let _ = tx.send(Message::DetailFailed);
                }
            }
        });
    }

    tokio::spawn(async move {
        match client.fetch_chart_data(&id).await {
            Ok(series) => {
                let _ = tx.send(Message::Chart(series));
            }
            Err(e) => {
                // The chart pane keeps its placeholder; only the log
                // records what went wrong.
                error!(coin = %id, error = %e, "failed to fetch chart data");
            }
        }
    });
}

/// Routes tracing output to the file named by `COINWATCH_LOG`.
///
/// The terminal is owned by the TUI, so diagnostics written to stdout
/// would corrupt the display. Without the variable set, logging stays
/// disabled.
fn init_logging() {
    let Ok(path) = std::env::var("COINWATCH_LOG") else {
        return;
    };
    if path.is_empty() {
        return;
    }
    if let Ok(file) = std::fs::File::create(&path) {
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .init();
    }
}
