use clap::Parser;
use env_logger::Env;
use intelboard::cli::Args;
use intelboard::config::ClientConfig;
use intelboard::{app, Dashboard, IntelResult};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let log_level = if args.quiet {
        "error"
    } else if args.verbose {
        "debug"
    } else {
        "info"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    log::debug!("Intelboard starting with args: {:?}", args);

    if let Err(e) = run(args).await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> IntelResult<()> {
    let config = ClientConfig::from_args(&args);
    let source = config.build_source()?;
    let mut dash = Dashboard::new(config.ordering);

    let outcome = app::execute(source.as_ref(), &mut dash, args.command, args.quiet).await;
    for line in outcome.lines {
        println!("{}", line);
    }
    outcome.status
}
