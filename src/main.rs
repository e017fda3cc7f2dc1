use clap::Parser;
use tradebot::cli::{output, run, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = dotenvy::dotenv();

    let args = Cli::parse();
    if let Err(e) = run::execute(args).await {
        output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
