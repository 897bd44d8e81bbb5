#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic board layout system for Forage levels.
//!
//! Given a level number, a validated configuration, a variant catalog, and
//! an injected random source, the system emits the complete ordered
//! sequence of tile [`Placement`] records for one level: the padded floor
//! and outer-wall rectangle, random walls and food drawn from a pool of
//! interior cells, a level-scaled batch of enemies, and a single exit.
//! All randomness flows through the caller-supplied [`Rng`], so a seeded
//! source replays the identical board.

use forage_core::{
    BoardConfig, BoardDimensions, CountRange, ExhaustionPolicy, GridCoord, Level, Placement,
    TileKind, VariantCatalog,
};
use rand::Rng;
use thiserror::Error;

/// Variant index assigned to the exit tile. A single exit visual exists.
const EXIT_VARIANT: u32 = 0;

/// Draw failure reported when the position pool has no cells left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("position pool has no cells left to draw")]
pub struct PoolExhausted;

/// Errors that abort level generation before a usable layout exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The board is too small to contain any interior cell.
    #[error("board interior requires at least 3x3 tiles, got {columns}x{rows}")]
    InvalidDimensions {
        /// Number of columns that was requested.
        columns: u32,
        /// Number of rows that was requested.
        rows: u32,
    },
    /// A placement pass drained the pool under [`ExhaustionPolicy::Fail`].
    #[error(transparent)]
    PoolExhausted(#[from] PoolExhausted),
}

/// Unordered pool of interior cells still available for object placement.
///
/// The pool is populated once per generation cycle and drained by repeated
/// draws; a drawn cell is removed immediately and can never be drawn again
/// within the same cycle.
#[derive(Clone, Debug, Default)]
pub struct PositionPool {
    cells: Vec<GridCoord>,
}

impl PositionPool {
    /// Creates an empty pool. Call [`PositionPool::initialise`] before
    /// drawing.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Clears the pool and refills it with every cell strictly inside the
    /// perimeter of the given board.
    ///
    /// Dimensions without an interior leave the pool empty, and every
    /// subsequent draw reports [`PoolExhausted`].
    pub fn initialise(&mut self, dimensions: BoardDimensions) {
        self.cells.clear();
        if !dimensions.has_interior() {
            return;
        }
        for x in 1..dimensions.columns() - 1 {
            for y in 1..dimensions.rows() - 1 {
                self.cells.push(GridCoord::new(x as i32, y as i32));
            }
        }
    }

    /// Draws one cell uniformly at random and removes it from the pool.
    pub fn draw_random<R: Rng>(&mut self, rng: &mut R) -> Result<GridCoord, PoolExhausted> {
        if self.cells.is_empty() {
            return Err(PoolExhausted);
        }
        let index = rng.gen_range(0..self.cells.len());
        Ok(self.cells.swap_remove(index))
    }

    /// Number of cells not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cells.len()
    }

    /// Reports whether every cell has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Lays down the padded rectangle covering `[-1, columns] x [-1, rows]`.
///
/// Cells on the ring one step outside the nominal board become outer
/// walls; everything else becomes floor. Each tile receives a uniformly
/// random variant from the catalog. A kind whose catalog count is zero
/// emits nothing for its cells. The pass never touches the position pool.
pub fn build_perimeter_and_floor<R: Rng, C: VariantCatalog>(
    dimensions: BoardDimensions,
    catalog: &C,
    rng: &mut R,
    out: &mut Vec<Placement>,
) {
    let max_x = dimensions.columns() as i32;
    let max_y = dimensions.rows() as i32;
    for x in -1..=max_x {
        for y in -1..=max_y {
            let cell = GridCoord::new(x, y);
            let kind = if dimensions.is_padded_edge(cell) {
                TileKind::OuterWall
            } else {
                TileKind::Floor
            };
            if let Some(variant) = pick_variant(catalog, kind, rng) {
                out.push(Placement::new(cell, kind, variant));
            }
        }
    }
}

/// Places a random number of tiles of `kind` on cells drawn from the pool.
///
/// The object count is sampled uniformly from `count_range`, both bounds
/// inclusive. When the pool runs dry mid-pass, the placements produced so
/// far remain in `out` and the shortfall is reported as [`PoolExhausted`]
/// for the caller to judge. A kind with no catalog variants yields no
/// placements and leaves the pool untouched.
pub fn layout_random<R: Rng, C: VariantCatalog>(
    pool: &mut PositionPool,
    rng: &mut R,
    kind: TileKind,
    count_range: CountRange,
    catalog: &C,
    out: &mut Vec<Placement>,
) -> Result<(), PoolExhausted> {
    let variants = catalog.variant_count(kind);
    if variants == 0 {
        return Ok(());
    }

    let object_count = rng.gen_range(count_range.minimum()..=count_range.maximum());
    for _ in 0..object_count {
        let cell = pool.draw_random(rng)?;
        let variant = rng.gen_range(0..variants);
        out.push(Placement::new(cell, kind, variant));
    }
    Ok(())
}

/// Number of enemies for a level: `floor(log2(level))`.
///
/// Level 1 yields zero enemies; the count grows by one each time the level
/// number doubles.
#[must_use]
pub const fn compute_enemy_count(level: Level) -> u32 {
    level.get().ilog2()
}

/// Orchestrates the fixed sequence of placement passes for one level.
///
/// The generator owns a single [`PositionPool`] that is re-initialised at
/// the start of every generation cycle; no other state survives between
/// levels.
#[derive(Clone, Debug, Default)]
pub struct BoardGenerator {
    pool: PositionPool,
}

impl BoardGenerator {
    /// Creates a generator with an empty position pool.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pool: PositionPool::new(),
        }
    }

    /// Produces the complete placement sequence for `level`.
    ///
    /// Passes run in layering order: floor and outer wall, then walls,
    /// food, and enemies drawn from the freshly initialised pool, and
    /// finally the exit. The exit always lands on
    /// [`BoardDimensions::exit_cell`] without consuming the pool, so it
    /// may coincide with an earlier placement. Undersized boards fail
    /// before any placement is produced.
    pub fn generate_level<R: Rng, C: VariantCatalog>(
        &mut self,
        level: Level,
        config: &BoardConfig,
        catalog: &C,
        rng: &mut R,
    ) -> Result<Vec<Placement>, GenerationError> {
        let dimensions = config.dimensions();
        if !dimensions.has_interior() {
            return Err(GenerationError::InvalidDimensions {
                columns: dimensions.columns(),
                rows: dimensions.rows(),
            });
        }

        let mut placements = Vec::new();
        build_perimeter_and_floor(dimensions, catalog, rng, &mut placements);
        self.pool.initialise(dimensions);

        self.run_pass(
            TileKind::Wall,
            config.wall_count(),
            config,
            catalog,
            rng,
            &mut placements,
        )?;
        self.run_pass(
            TileKind::Food,
            config.food_count(),
            config,
            catalog,
            rng,
            &mut placements,
        )?;
        let enemies = CountRange::exact(compute_enemy_count(level));
        self.run_pass(
            TileKind::Enemy,
            enemies,
            config,
            catalog,
            rng,
            &mut placements,
        )?;

        placements.push(Placement::new(
            dimensions.exit_cell(),
            TileKind::Exit,
            EXIT_VARIANT,
        ));
        Ok(placements)
    }

    fn run_pass<R: Rng, C: VariantCatalog>(
        &mut self,
        kind: TileKind,
        count_range: CountRange,
        config: &BoardConfig,
        catalog: &C,
        rng: &mut R,
        out: &mut Vec<Placement>,
    ) -> Result<(), GenerationError> {
        match layout_random(&mut self.pool, rng, kind, count_range, catalog, out) {
            Ok(()) => Ok(()),
            Err(exhausted) => match config.exhaustion_policy() {
                ExhaustionPolicy::Truncate => Ok(()),
                ExhaustionPolicy::Fail => Err(GenerationError::from(exhausted)),
            },
        }
    }
}

fn pick_variant<R: Rng, C: VariantCatalog>(
    catalog: &C,
    kind: TileKind,
    rng: &mut R,
) -> Option<u32> {
    let variants = catalog.variant_count(kind);
    if variants == 0 {
        return None;
    }
    Some(rng.gen_range(0..variants))
}
