//! # Catalog Console Library
//!
//! Interactive terminal front end for the product catalog. Every input line
//! is one UI event; the screen is redrawn from state after each event.
//!
//! ## Module Organization
//! ```text
//! catalog_console/
//! ├── lib.rs          ◄─── You are here (startup & event loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Store, view state, form, pending delete
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Line parsing & dispatch
//! │   ├── product.rs  ◄─── Add / edit / delete commands
//! │   └── view.rs     ◄─── Search, view mode, pagination commands
//! ├── debounce.rs     ◄─── Search debounce deadline
//! ├── render.rs       ◄─── Pure screen renderer
//! └── error.rs        ◄─── App & config error types
//! ```
//!
//! ## Event Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Single-Threaded Event Loop                           │
//! │                                                                         │
//! │            ┌───────────────── tokio::select! ─────────────────┐         │
//! │            │                                                   │         │
//! │   stdin next_line()                               debouncer.fired()     │
//! │            │                                                   │         │
//! │            ▼                                                   ▼         │
//! │   commands::handle_line()                         commit_search()       │
//! │            │                                                   │         │
//! │            ├── debounce? ──► debouncer.schedule()              │         │
//! │            ├── redraw?  ──► render_screen() ◄──────────────────┘         │
//! │            ├── message? ──► status line                                 │
//! │            └── quit / EOF ──► exit                                      │
//! │                                                                         │
//! │  The loop owns CatalogState; nothing else mutates it.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod debounce;
pub mod error;
pub mod render;
pub mod state;

use catalog_core::ProductStore;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use debounce::Debouncer;
use error::AppResult;
use render::render_screen;
use state::{CatalogState, ConfigState};

const PROMPT: &str = "> ";

/// Loads configuration and sample data, then runs the event loop on
/// stdin/stdout until `quit` or end of input.
///
/// ## Startup Sequence
/// 1. Load config (defaults, `config.toml`, `CATALOG_*` env vars)
/// 2. Seed the in-memory store from the embedded sample catalog
/// 3. Draw the first screen and start reading input
pub async fn run() -> AppResult<()> {
    let config = ConfigState::load(None)?;
    let store = ProductStore::seeded()?;

    info!(
        products = store.len(),
        page_size = config.page_size,
        view = %config.default_view,
        "Catalog loaded"
    );

    let state = CatalogState::new(store, &config);
    let input = BufReader::new(tokio::io::stdin());
    let output = tokio::io::stdout();

    event_loop(state, &config, input, output).await?;

    info!("Catalog console exited");
    Ok(())
}

/// Drives the catalog from `input` lines, writing screens to `output`.
///
/// Returns the final state once input ends or `quit` is entered. Command
/// failures are printed and the loop carries on; only I/O errors end it
/// early.
pub async fn event_loop<R, W>(
    mut state: CatalogState,
    config: &ConfigState,
    input: R,
    mut output: W,
) -> AppResult<CatalogState>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut debouncer = Debouncer::new(config.search_debounce());

    write_frame(&mut output, &render_screen(&state, config)).await?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    info!("Input closed");
                    break;
                };

                let mut frame = String::new();
                let mut quit = false;

                match commands::handle_line(&mut state, &line) {
                    Ok(outcome) => {
                        if outcome.debounce {
                            debouncer.schedule();
                        }
                        if outcome.redraw {
                            frame.push_str(&render_screen(&state, config));
                        }
                        if let Some(message) = outcome.message {
                            frame.push_str(&message);
                            frame.push('\n');
                        }
                        quit = outcome.quit;
                    }
                    Err(e) => {
                        warn!(code = e.code.as_str(), "Command failed: {}", e.message);
                        frame.push_str(&format!("{}\n", e));
                    }
                }

                if quit {
                    output.write_all(frame.as_bytes()).await?;
                    output.flush().await?;
                    break;
                }
                write_frame(&mut output, &frame).await?;
            }
            _ = debouncer.fired() => {
                state.commit_search();
                write_frame(&mut output, &render_screen(&state, config)).await?;
            }
        }
    }

    Ok(state)
}

/// Writes `frame` followed by the input prompt.
async fn write_frame<W: AsyncWrite + Unpin>(output: &mut W, frame: &str) -> AppResult<()> {
    output.write_all(frame.as_bytes()).await?;
    output.write_all(PROMPT.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never mix with the screen on stdout.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=catalog_core=trace` - Trace the core crate only
/// - Default: warnings, plus info from the catalog crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,catalog_core=info,catalog_console=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::duplex;
    use tokio::time::sleep;

    fn seeded() -> CatalogState {
        CatalogState::new(ProductStore::seeded().unwrap(), &ConfigState::default())
    }

    async fn run_script(input: &str) -> (CatalogState, String) {
        let mut output = Vec::new();
        let state = event_loop(seeded(), &ConfigState::default(), input.as_bytes(), &mut output)
            .await
            .unwrap();
        (state, String::from_utf8(output).unwrap())
    }

    #[tokio::test]
    async fn test_draws_initial_screen() {
        let (_, screen) = run_script("").await;
        assert!(screen.starts_with("Product Management"));
        assert!(screen.ends_with(PROMPT));
    }

    #[tokio::test]
    async fn test_quit_stops_reading() {
        let (state, _) = run_script("quit\nadd\n").await;
        assert!(state.form().is_none());
    }

    #[tokio::test]
    async fn test_errors_do_not_stop_loop() {
        let (state, screen) = run_script("bogus\nedit 99\nnext\n").await;
        assert!(screen.contains("[INVALID_COMMAND]"));
        assert!(screen.contains("[NOT_FOUND] Product not found: 99"));
        assert_eq!(state.view().current_page, 2);
    }

    #[tokio::test]
    async fn test_add_edit_delete_script() {
        let script = "\
add
set name Stapler
set price 120
set category Stationery
save
edit 11
set stock 7
save
delete 1
y
";
        let (state, screen) = run_script(script).await;
        assert!(screen.contains("Added product #11 Stapler"));
        assert!(screen.contains("Updated product #11 Stapler"));
        assert!(screen.contains("Deleted product #1 Wireless Mouse"));
        assert_eq!(state.store().len(), 10);
        assert_eq!(state.store().get(11).unwrap().stock, 7);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_commits_after_quiet_period() {
        let (mut client, server) = duplex(1024);
        let config = ConfigState::default();
        let mut output = Vec::new();

        let typing = async move {
            for text in ["p", "pe", "pen"] {
                client
                    .write_all(format!("search {}\n", text).as_bytes())
                    .await
                    .unwrap();
                sleep(Duration::from_millis(200)).await;
            }
            sleep(Duration::from_millis(600)).await;
            drop(client);
        };

        let looping = event_loop(
            seeded(),
            &config,
            BufReader::new(server),
            &mut output,
        );

        let (state, ()) = tokio::join!(looping, typing);
        let state = state.unwrap();
        let screen = String::from_utf8(output).unwrap();

        assert_eq!(state.view().debounced_query, "pen");
        // Initial screen plus exactly one redraw for three keystrokes.
        assert_eq!(screen.matches("Product Management").count(), 2);
        assert!(screen.contains("Ballpoint Pen"));
    }
}
