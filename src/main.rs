use console::style;
use ghpulse::cli::Cli;
use std::process;

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = cli.execute().await {
        eprintln!("{}", style(err.to_string()).red());
        process::exit(1);
    }
}
