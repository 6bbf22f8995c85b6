use std::fs::File;
use std::process::exit;

use clap::Parser;
use log::{error, info};
use simplelog::WriteLogger;

use linked_snake::app::SnakeApp;
use linked_snake::{Config, Result};

fn main() {
    let config = Config::parse();

    if let Err(err) = run(config) {
        error!("{}", err);
        eprintln!("{}", err);
        exit(1);
    }
}

fn run(config: Config) -> Result<()> {
    // stdout belongs to the game, so logs go to a file
    WriteLogger::init(config.log_level, simplelog::Config::default(), File::create(&config.log_file)?)?;
    info!("Starting with {:?}", config);

    let mut app = SnakeApp::new(config)?;
    app.run()
}
