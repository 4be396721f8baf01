#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_hotseat::prelude::*;

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Two-player Battleship for a shared terminal.
///
/// Set BATTLESHIP_LOG=debug to see engine logs on stderr.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    init_logging();

    let mut seed_rng = rand::rng();
    let mut rng = SmallRng::from_rng(&mut seed_rng);
    let mut console = StdConsole::new();
    run_game(&mut console, &mut rng)?;
    Ok(())
}
