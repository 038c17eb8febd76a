// Terminal entry point.
// Sets up logging and the terminal, then hands control to the app loop.

mod app;
mod ui;

use std::sync::Arc;

use popular::{GitHubClient, SelectionController};

use crate::app::App;

#[tokio::main]
async fn main() -> popular::Result<()> {
    // Logs go to stderr and would tear the alternate screen; only enable on request.
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let client = GitHubClient::from_env()?;
    tracing::info!(base_url = client.base_url(), "Starting popular");
    let controller = SelectionController::new(Arc::new(client));
    let mut app = App::new(controller);

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    result.map_err(Into::into)
}
