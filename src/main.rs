use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use srt_lint::config::{Args, Command, Config};
use srt_lint::lsp::server::serve;
use srt_lint::report::run_lint;

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    let config = Config::from_args(&args)?;

    match args.command {
        Command::Lint { paths } => {
            match run_lint(&paths, &config, &mut io::stdout().lock()) {
                Ok(summary) => Ok(ExitCode::from(summary.exit_code())),
                Err(err) => {
                    eprintln!("error: {:#}", err);
                    Ok(ExitCode::from(2))
                }
            }
        }
        Command::Serve => {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            runtime.block_on(serve(config))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
