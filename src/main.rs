#![deny(warnings)]

use clap::Parser;
use color_eyre::eyre::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

use snowcard::{
    infrastructure::{cli::Cli, config::Config, tui::real::RealTui},
    integration::app_runner::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let mut config = Config::new()?;
    if let Some(theme) = args.theme {
        config.card.theme = theme;
    }

    let mut runner = {
        let tui = Arc::new(Mutex::new(
            RealTui::new()?
                .tick_rate(args.tick_rate)
                .frame_rate(args.frame_rate),
        ));
        AppRunner::new_with_real(config, tui)
            .await?
            .show_fps(args.show_fps)
    };
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
