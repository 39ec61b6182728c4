use anyhow::{Context, Result};
use clap::Parser;
use quantum_painter_core::*;

/// Mixed into the seed so cell picks don't mirror the brush draws.
const CLICK_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Give up after this many clicks, painted cells included
    #[arg(short, long, default_value_t = 100)]
    clicks: u32,

    /// Points needed per level
    #[arg(long, default_value_t = PainterConfig::DEFAULT_LEVEL_STEP)]
    level_step: u32,

    /// Chance of a reveal turning into a power-up
    #[arg(long, default_value_t = PainterConfig::DEFAULT_POWER_UP_CHANCE)]
    power_up_chance: f64,

    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let config = PainterConfig::new(
        args.level_step,
        args.power_up_chance,
        PainterConfig::DEFAULT_STARTING_LIVES,
    );
    let mut engine =
        PaintEngine::with_config(config, seeded_source(seed)).context("invalid configuration")?;
    let mut picks = seeded_source(seed ^ CLICK_SALT);

    let clicks = play(&mut engine, &mut picks, args.clicks)?;
    log::info!(
        "Finished after {} clicks, {} cells painted",
        clicks,
        engine.revealed_count()
    );

    let snapshot = Snapshot::from_engine(&engine);
    if args.json {
        println!("{}", snapshot.to_json()?);
    } else {
        print_summary(&snapshot, seed);
    }
    Ok(())
}

/// Clicks random cells like an impatient player until the canvas is full.
fn play<R: RandomSource>(
    engine: &mut PaintEngine<R>,
    picks: &mut impl RandomSource,
    max_clicks: u32,
) -> Result<u32> {
    let (size_x, size_y) = engine.size();
    let cells = usize::from(size_x) * usize::from(size_y);

    let mut clicks = 0;
    while clicks < max_clicks && !engine.is_board_full() {
        let pick = picks.draw_index(cells);
        let coords = ((pick % usize::from(size_x)) as Coord, (pick / usize::from(size_x)) as Coord);
        clicks += 1;

        match engine
            .reveal(coords)
            .with_context(|| format!("click at {coords:?}"))?
        {
            RevealOutcome::NoChange => log::trace!("{:?} already painted", coords),
            RevealOutcome::Painted { power_up: true, .. } => {
                log::debug!("Power-up at {:?}", coords)
            }
            RevealOutcome::Painted { .. } => {}
        }
    }
    Ok(clicks)
}

fn print_summary(snapshot: &Snapshot, seed: u64) {
    let (x_end, y_end) = snapshot.size;
    for y in 0..y_end {
        let row: String = (0..x_end)
            .map(|x| match snapshot.cell_at((x, y)) {
                Some(color) => color.name()[..1].to_ascii_uppercase(),
                None => ".".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        println!("{row}");
    }
    println!(
        "seed {} | score {} | level {} | lives {} | next color {} | power-ups {}",
        seed,
        snapshot.score,
        snapshot.level,
        snapshot.lives,
        snapshot.current_color,
        snapshot.power_up_cells.len()
    );
}
