use clap::{CommandFactory, Parser};
use coinwatch::app::App;
use coinwatch::render::{render_message, Listing, Severity};
use coinwatch::Cli;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    // Bare invocation shows usage and exits cleanly
    if std::env::args().len() == 1 {
        let _ = Cli::command().print_help();
        println!();
        return ExitCode::SUCCESS;
    }

    let cli = Cli::parse();
    let app = match App::new(&cli) {
        Ok(app) => app,
        Err(err) => return report_fatal(&err, !cli.no_color),
    };

    match app.run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_fatal(&err, app.listing().color),
    }
}

fn report_fatal(err: &coinwatch::AppError, color: bool) -> ExitCode {
    let listing = Listing {
        color,
        ..Listing::default()
    };
    println!(
        "{}",
        render_message(&err.to_string(), Severity::Fatal, &listing)
    );
    ExitCode::FAILURE
}
