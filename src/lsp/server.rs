use std::thread;
use std::time::Duration;

use anyhow::Result;
use tokio::io::{stdin, stdout};
use tower_lsp::{LspService, Server};

use crate::lsp::backend::Backend;
use crate::Config;

/// Environment variable making the server exit after one second, for tests
pub const TEST_EXIT_ENV: &str = "SRT_LINT_TEST_EXIT";

/// Start the LSP server on stdin/stdout
pub async fn serve(config: Config) -> Result<()> {
    log::info!("Starting language server for {:?}", config.extensions);

    // Let the integration test read stdout to EOF
    if std::env::var(TEST_EXIT_ENV).as_deref() == Ok("1") {
        thread::spawn(|| {
            thread::sleep(Duration::from_secs(1));
            std::process::exit(0);
        });
    }

    let (service, socket) = LspService::build(move |client| Backend::new(client, config)).finish();

    Server::new(stdin(), stdout(), socket).serve(service).await;

    Ok(())
}
