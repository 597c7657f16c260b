mod command_line;
mod config;
mod contracts;
mod deploy;
mod utils;

use std::process;

use clap::Parser;
use command_line::CommandLine;

#[tokio::main]
async fn main() {
    env_logger::init();
    let cmd = CommandLine::parse();
    if let Err(err) = cmd.execute().await {
        log::error!("deployment failed: {err:#}");
        process::exit(1);
    }
}
