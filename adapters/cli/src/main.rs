#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that generates and prints Forage level layouts.

mod layout_transfer;
mod render;

use std::num::NonZeroU32;

use anyhow::Context;
use clap::Parser;
use forage_core::{
    BoardConfig, BoardDimensions, CountRange, ExhaustionPolicy, Level, VariantInventory,
};
use forage_system_board_generation::BoardGenerator;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::layout_transfer::BoardLayoutSnapshot;

/// Variant counts matching the tile art bundled with the game: eight floor
/// tiles, three outer walls, three walls, two food items, two enemies.
const DEFAULT_VARIANTS: VariantInventory = VariantInventory::new(8, 3, 3, 2, 2);

/// Procedural level layout for the Forage grid world.
#[derive(Debug, Parser)]
#[command(name = "forage")]
struct Cli {
    /// Number of board columns including the perimeter.
    #[arg(long, default_value_t = 8)]
    columns: u32,
    /// Number of board rows including the perimeter.
    #[arg(long, default_value_t = 8)]
    rows: u32,
    /// One-based level number driving enemy progression.
    #[arg(long, default_value_t = 1)]
    level: u32,
    /// Seed for the layout RNG; omit for a fresh random board.
    #[arg(long)]
    seed: Option<u64>,
    /// Inclusive wall count range formatted as MIN:MAX.
    #[arg(long, default_value = "5:9", value_parser = parse_count_range)]
    walls: CountRange,
    /// Inclusive food count range formatted as MIN:MAX.
    #[arg(long, default_value = "1:5", value_parser = parse_count_range)]
    food: CountRange,
    /// Fail generation instead of truncating when the board runs out of
    /// free cells.
    #[arg(long)]
    strict: bool,
    /// Also print a shareable single-line encoding of the layout.
    #[arg(long)]
    share: bool,
    /// Render a previously shared layout instead of generating a new one.
    #[arg(long, value_name = "LAYOUT")]
    load: Option<String>,
}

/// Entry point for the Forage command-line interface.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(encoded) = cli.load.as_deref() {
        let snapshot =
            BoardLayoutSnapshot::decode(encoded).context("could not decode shared layout")?;
        println!(
            "{}",
            render::render_board(snapshot.dimensions(), snapshot.placements())
        );
        return Ok(());
    }

    let level = NonZeroU32::new(cli.level)
        .map(Level::new)
        .context("level must be at least 1")?;
    let dimensions = BoardDimensions::new(cli.columns, cli.rows);
    let policy = if cli.strict {
        ExhaustionPolicy::Fail
    } else {
        ExhaustionPolicy::Truncate
    };
    let config = BoardConfig::new(dimensions, cli.walls, cli.food, policy);

    let seed = cli.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut generator = BoardGenerator::new();
    let placements = generator
        .generate_level(level, &config, &DEFAULT_VARIANTS, &mut rng)
        .with_context(|| format!("could not generate level {}", cli.level))?;

    println!("{}", render::render_board(dimensions, &placements));
    println!(
        "level {} seed {seed} ({} placements)",
        cli.level,
        placements.len()
    );

    if cli.share {
        let snapshot = BoardLayoutSnapshot::new(dimensions, placements);
        println!("{}", snapshot.encode());
    }

    Ok(())
}

/// Parses an inclusive `MIN:MAX` pair into a validated count range.
fn parse_count_range(value: &str) -> Result<CountRange, String> {
    let (minimum, maximum) = value
        .split_once(':')
        .ok_or_else(|| format!("expected MIN:MAX, got '{value}'"))?;
    let minimum = minimum
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("could not parse minimum '{minimum}'"))?;
    let maximum = maximum
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("could not parse maximum '{maximum}'"))?;
    CountRange::new(minimum, maximum).map_err(|error| error.to_string())
}

#[cfg(test)]
mod tests {
    use super::parse_count_range;

    #[test]
    fn parses_well_formed_range() {
        let range = parse_count_range("5:9").expect("range parses");
        assert_eq!(range.minimum(), 5);
        assert_eq!(range.maximum(), 9);
    }

    #[test]
    fn rejects_missing_delimiter() {
        assert!(parse_count_range("59").is_err());
    }

    #[test]
    fn rejects_inverted_bounds() {
        assert!(parse_count_range("9:5").is_err());
    }
}
