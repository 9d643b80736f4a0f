//! betabrite - send messages to BetaBrite / Alpha LED signs
//!
//! Compiles tag-annotated text, STRING data, special functions or memory
//! layouts into one protocol frame and delivers it over USB, a serial port
//! or stdout.
//!
//! ```text
//! betabrite --label A "[top] [red] Hello" "[str1]"
//! betabrite --mode settime 14:30
//! betabrite --mode cfgmem "t[A,2048]" "s[1,32]"
//! betabrite --dump --clear
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use betabrite_protocol::Frame;

mod cli;
mod config;
mod deliver;
mod dispatch;
mod logging;

use crate::cli::Cli;
use crate::config::{load_config, Overrides};
use crate::deliver::{deliver, hex_dump};
use crate::dispatch::{build_command, glyph_table, Action};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;
    let overrides = Overrides {
        address: cli.address.clone(),
        sign_type: cli.sign_type.clone(),
        delay_us: cli.delay_us,
    };
    let settings = config.resolve(&overrides)?;

    let action = Action::from_cli(&cli);
    let command = build_command(action, &cli.label, &cli.data, glyph_table(settings.charset))?;
    let frame = Frame::for_command(settings.address, settings.sign_type, &command).encode();

    if cli.dump {
        println!("{}", hex_dump(&frame));
        return Ok(());
    }

    deliver(&frame, &settings).context("failed to send frame to sign")?;
    info!("{action:?} sent ({} bytes)", frame.len());
    Ok(())
}
