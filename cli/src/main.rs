use clap::Parser;
use minedig::{Args, Outcome, Settings, play};
use minedig_core::Board;
use std::io;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let settings = Settings::from_args(&args)?;
    log::debug!("settings: {:?}", settings);

    let board = Board::new(settings.game, settings.generator());
    let outcome = play(board, io::stdin().lock(), io::stdout().lock())?;

    if outcome == Outcome::Abandoned {
        log::info!("Game abandoned");
    }
    Ok(())
}
