use encybara_admin::adapters::ReqwestHttpClient;
use encybara_admin::api::AdminApi;
use encybara_admin::app::App;
use encybara_admin::cli::{parse_args, run_info_command, run_report_command, CliCommand};
use encybara_admin::config::AppConfig;
use encybara_admin::input::CommandRegistry;
use encybara_admin::logging::{self, LogTarget};
use encybara_admin::terminal::{setup_panic_hook, TerminalManager};
use encybara_admin::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Redraw/animation tick.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let args = parse_args(std::env::args())?;

    // Version and help need nothing else
    if run_info_command(args.command) {
        return Ok(());
    }

    color_eyre::install()?;

    // The TUI owns the terminal, so it logs to a file; without a home
    // directory it runs without logs.
    let log_target = if args.command == CliCommand::RunTui {
        logging::default_log_path().map(LogTarget::File)
    } else {
        Some(LogTarget::Stderr)
    };
    if let Some(target) = log_target {
        logging::init(target);
    }

    let config = AppConfig::load(args.overrides)?;
    info!(
        base_url = %config.base_url,
        authorized = config.token.is_some(),
        timeout_secs = config.request_timeout.as_secs(),
        "configuration loaded"
    );

    let http = ReqwestHttpClient::with_timeout(config.request_timeout)?;
    let api = AdminApi::new(Arc::new(http));
    let ctx = config.request_context();

    let runtime = tokio::runtime::Runtime::new()?;

    if let Some(result) = runtime.block_on(run_report_command(args.command, &api, &ctx)) {
        if let Err(e) = &result {
            error!("command failed: {}", e);
        }
        return result;
    }

    setup_panic_hook();

    runtime.block_on(async {
        let mut term_manager = TerminalManager::new()?;
        let mut app = App::new(api, ctx);
        app.load_summary();

        let result = run_app(term_manager.terminal(), &mut app).await;
        term_manager.restore()?;

        if let Err(e) = &result {
            error!("application error: {}", e);
        }
        info!("exiting");
        result
    })
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let registry = CommandRegistry::new();
    let mut event_stream = EventStream::new();
    let mut message_rx = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => {
                        let context = app.build_input_context();
                        if let Some(cmd) = registry.dispatch(key, &context) {
                            app.execute_command(cmd);
                        }
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }

            Some(msg) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
