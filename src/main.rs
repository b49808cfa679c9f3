use std::sync::Arc;

use rsvp_app::RsvpFlow;
use tracing::info;
use wedding_rsvp::bootstrap::config::CONFIG_PATH_ENV;
use wedding_rsvp::bootstrap::{
    config_path, init_tracing_subscriber, load_or_default, resolve_settings, wire_dependencies,
};
use wedding_rsvp::terminal::{run_terminal, TerminalRenderer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing_subscriber()?;

    let config_path = config_path(std::env::args().nth(1), std::env::var(CONFIG_PATH_ENV).ok());
    let data_dir = dirs::data_dir();
    let config = load_or_default(&config_path, data_dir.clone())?;
    let settings = resolve_settings(&config, data_dir);

    let wired = wire_dependencies(&settings, Arc::new(TerminalRenderer::stdout()))?;
    let flow = Arc::new(RsvpFlow::mount(wired.deps, settings.flow).await);

    let result = run_terminal(Arc::clone(&flow), wired.history).await;
    flow.teardown().await;
    info!("wedding rsvp host exiting");
    result
}
