mod cmd;

use anyhow::Result;
use argp::FromArgs;
use tracing_subscriber::{
    EnvFilter, Layer, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

#[derive(FromArgs, PartialEq, Debug)]
/// Report visual-regression comparison outcomes to the review service.
struct TopLevel {
    #[argp(subcommand)]
    command: Command,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argp(subcommand)]
enum Command {
    Notify(cmd::notify::Args),
    Decode(cmd::decode::Args),
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::builder()
        // Default to info level
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(env_filter))
        .init();

    let args: TopLevel = argp::parse_args_or_exit(argp::DEFAULT);
    match args.command {
        Command::Notify(args) => cmd::notify::run(args).await,
        Command::Decode(args) => cmd::decode::run(args),
    }
}
