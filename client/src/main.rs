use std::process::ExitCode;

use clap::Parser;
use client::net::ApiClient;
use client::page::{HomePage, LoadState};

#[derive(Parser, Debug)]
#[command(name = "home", about = "Console home page for the starter backend")]
struct Cli {
    /// Backend base URL.
    #[arg(long, env = "BACKEND_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let client = ApiClient::new(cli.base_url);
    let mut page = HomePage::new();

    for line in page.render() {
        println!("{line}");
    }

    page.load(&client).await;

    for line in page.render() {
        println!("{line}");
    }

    if matches!(page.state(), LoadState::Failed { .. }) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
