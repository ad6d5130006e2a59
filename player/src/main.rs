use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use powergrid::{BoardBuilder, Direction, Session, TickReport};

#[derive(Debug, Parser)]
#[command(author, version, about = "Generate a wiring puzzle and play it from the command line")]
struct Cli {
    /// Board width in tiles
    #[arg(long, default_value_t = 8)]
    width: usize,

    /// Board height in tiles
    #[arg(long, default_value_t = 8)]
    height: usize,

    /// Seed for a reproducible board
    #[arg(long)]
    seed: Option<u64>,

    /// Fixed power radius instead of the derived one
    #[arg(long)]
    radius: Option<u32>,

    /// Leave the tiles unrotated, i.e. print the solution
    #[arg(long)]
    no_scramble: bool,

    /// Moves to play before the final tick: `l:ROW,COL` and `r:ROW,COL` rotate a tile,
    /// a direction name moves the station, and `reset` generates a new board
    moves: Vec<String>,
}

fn parse_cell(spec: &str) -> Result<(usize, usize)> {
    let (row, col) = spec.split_once(',').with_context(|| format!("expected ROW,COL, got `{spec}`"))?;
    Ok((row.trim().parse()?, col.trim().parse()?))
}

fn play(session: &mut Session, token: &str) -> Result<()> {
    let changed = match token.split_once(':') {
        Some(("l", cell)) => {
            let (row, col) = parse_cell(cell)?;
            session.rotate_tile_left(row, col)
        }
        Some(("r", cell)) => {
            let (row, col) = parse_cell(cell)?;
            session.rotate_tile_right(row, col)
        }
        Some(_) => bail!("unknown move `{token}`"),
        None if token == "reset" => {
            session.reset()?;
            true
        }
        None => session.move_power_station(Direction::parse(token)?),
    };

    if !changed {
        info!(token, "move had no effect");
    }
    Ok(())
}

fn print_levels(report: &TickReport) {
    for row in report.levels.rows() {
        let line = row.iter().map(|level| format!("{level:>3}")).collect::<String>();
        println!("{line}");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .compact()
        .init();

    let cli = Cli::parse();

    let mut builder = BoardBuilder::with_size(cli.width, cli.height);
    builder.scramble(!cli.no_scramble);
    if let Some(seed) = cli.seed {
        builder.seed(seed);
    }
    if let Some(radius) = cli.radius {
        builder.radius(radius);
    }
    let mut session = builder.build()?;

    for token in &cli.moves {
        play(&mut session, token)?;
    }

    let report = session.tick();
    print!("{}", session.board());
    println!();
    print_levels(&report);
    println!(
        "station at row {}, col {}; radius {}; {}",
        session.station().row(),
        session.station().col(),
        session.radius(),
        if report.is_won { "solved" } else { "not solved" }
    );
    Ok(())
}
