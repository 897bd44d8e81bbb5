#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Forage level generator.
//!
//! This crate defines the value types exchanged between host adapters and
//! the board generation system: grid coordinates, tile kinds, resolved
//! [`Placement`] records, and the validated configuration that drives a
//! generation request. No layout logic lives here; the generation system
//! consumes these contracts and emits placement sequences for the host to
//! instantiate however it renders tiles.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Location of a single grid cell expressed as signed x and y coordinates.
///
/// Coordinates are signed because the outer-wall ring extends one cell
/// beyond the nominal board on every side, placing tiles at -1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    x: i32,
    y: i32,
}

impl GridCoord {
    /// Creates a new grid coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal component of the coordinate.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical component of the coordinate.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }
}

/// Roles a tile placement can take on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    /// Walkable background tile covering the padded rectangle.
    Floor,
    /// Indestructible perimeter tile enclosing the board.
    OuterWall,
    /// Destructible obstacle placed on an interior cell.
    Wall,
    /// Collectible item placed on an interior cell.
    Food,
    /// Hostile unit placed on an interior cell.
    Enemy,
    /// Level exit anchored at the far corner of the board.
    Exit,
}

/// A resolved decision to put one tile kind, with a chosen visual variant,
/// at a specific cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    cell: GridCoord,
    kind: TileKind,
    variant: u32,
}

impl Placement {
    /// Creates a new placement record.
    #[must_use]
    pub const fn new(cell: GridCoord, kind: TileKind, variant: u32) -> Self {
        Self {
            cell,
            kind,
            variant,
        }
    }

    /// Cell the tile occupies.
    #[must_use]
    pub const fn cell(&self) -> GridCoord {
        self.cell
    }

    /// Role the tile plays on the board.
    #[must_use]
    pub const fn kind(&self) -> TileKind {
        self.kind
    }

    /// Index selecting among the visual variants available for the kind.
    #[must_use]
    pub const fn variant(&self) -> u32 {
        self.variant
    }
}

/// Error produced when a count range is requested with inverted bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("count range minimum {minimum} exceeds maximum {maximum}")]
pub struct InvalidCountRange {
    /// Lower bound that was requested.
    pub minimum: u32,
    /// Upper bound that was requested.
    pub maximum: u32,
}

/// Inclusive bounds for a randomly sampled object quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CountRange {
    minimum: u32,
    maximum: u32,
}

impl CountRange {
    /// Creates a range after checking that the bounds are ordered.
    pub fn new(minimum: u32, maximum: u32) -> Result<Self, InvalidCountRange> {
        if minimum > maximum {
            return Err(InvalidCountRange { minimum, maximum });
        }
        Ok(Self { minimum, maximum })
    }

    /// Creates the degenerate range that always samples to `count`.
    #[must_use]
    pub const fn exact(count: u32) -> Self {
        Self {
            minimum: count,
            maximum: count,
        }
    }

    /// Inclusive lower bound of the range.
    #[must_use]
    pub const fn minimum(&self) -> u32 {
        self.minimum
    }

    /// Inclusive upper bound of the range.
    #[must_use]
    pub const fn maximum(&self) -> u32 {
        self.maximum
    }
}

/// Width and height of the board measured in tiles, perimeter included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoardDimensions {
    columns: u32,
    rows: u32,
}

impl BoardDimensions {
    /// Creates a new dimension descriptor.
    #[must_use]
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Number of columns including the perimeter.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows including the perimeter.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Reports whether any interior cell exists. A board needs at least
    /// three columns and three rows to hold one cell inside the perimeter.
    #[must_use]
    pub const fn has_interior(&self) -> bool {
        self.columns >= 3 && self.rows >= 3
    }

    /// Number of interior cells eligible for object placement.
    #[must_use]
    pub const fn interior_cell_count(&self) -> u64 {
        if !self.has_interior() {
            return 0;
        }
        (self.columns as u64 - 2) * (self.rows as u64 - 2)
    }

    /// Number of cells in the padded rectangle, outer-wall ring included.
    #[must_use]
    pub const fn padded_cell_count(&self) -> u64 {
        (self.columns as u64 + 2) * (self.rows as u64 + 2)
    }

    /// Reports whether the cell lies on the outer-wall ring of the padded
    /// rectangle.
    #[must_use]
    pub const fn is_padded_edge(&self, cell: GridCoord) -> bool {
        let x = cell.x() as i64;
        let y = cell.y() as i64;
        x == -1 || x == self.columns as i64 || y == -1 || y == self.rows as i64
    }

    /// Reports whether the cell lies strictly inside the perimeter.
    #[must_use]
    pub const fn contains_interior(&self, cell: GridCoord) -> bool {
        if !self.has_interior() {
            return false;
        }
        let x = cell.x() as i64;
        let y = cell.y() as i64;
        1 <= x && x <= self.columns as i64 - 2 && 1 <= y && y <= self.rows as i64 - 2
    }

    /// Cell that always receives the exit tile.
    #[must_use]
    pub const fn exit_cell(&self) -> GridCoord {
        GridCoord::new(self.columns as i32 - 1, self.rows as i32 - 1)
    }
}

/// One-based level number that drives enemy progression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Level(NonZeroU32);

impl Level {
    /// Wraps a non-zero level number.
    #[must_use]
    pub const fn new(value: NonZeroU32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric level.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0.get()
    }
}

/// Policy applied when a placement pass requests more cells than remain
/// in the position pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExhaustionPolicy {
    /// Stop the pass early and keep the placements produced so far.
    Truncate,
    /// Abort generation with an error.
    Fail,
}

impl Default for ExhaustionPolicy {
    fn default() -> Self {
        Self::Truncate
    }
}

/// Configuration for one level generation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    dimensions: BoardDimensions,
    wall_count: CountRange,
    food_count: CountRange,
    exhaustion_policy: ExhaustionPolicy,
}

impl BoardConfig {
    /// Creates a new generation configuration.
    #[must_use]
    pub const fn new(
        dimensions: BoardDimensions,
        wall_count: CountRange,
        food_count: CountRange,
        exhaustion_policy: ExhaustionPolicy,
    ) -> Self {
        Self {
            dimensions,
            wall_count,
            food_count,
            exhaustion_policy,
        }
    }

    /// Board dimensions for the level.
    #[must_use]
    pub const fn dimensions(&self) -> BoardDimensions {
        self.dimensions
    }

    /// Bounds for the random number of destructible walls.
    #[must_use]
    pub const fn wall_count(&self) -> CountRange {
        self.wall_count
    }

    /// Bounds for the random number of food items.
    #[must_use]
    pub const fn food_count(&self) -> CountRange {
        self.food_count
    }

    /// Policy applied when a pass drains the position pool.
    #[must_use]
    pub const fn exhaustion_policy(&self) -> ExhaustionPolicy {
        self.exhaustion_policy
    }
}

/// External capability describing how many visual variants exist per tile
/// kind.
///
/// The layout core only ever needs the count; resolving a variant index to
/// a concrete asset stays on the host side.
pub trait VariantCatalog {
    /// Number of visual variants available for `kind`.
    fn variant_count(&self, kind: TileKind) -> u32;
}

/// Variant counts for every randomized tile kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantInventory {
    floor: u32,
    outer_wall: u32,
    wall: u32,
    food: u32,
    enemy: u32,
}

impl VariantInventory {
    /// Creates an inventory with one count per randomized kind. The exit
    /// is excluded because it always has exactly one visual.
    #[must_use]
    pub const fn new(floor: u32, outer_wall: u32, wall: u32, food: u32, enemy: u32) -> Self {
        Self {
            floor,
            outer_wall,
            wall,
            food,
            enemy,
        }
    }
}

impl VariantCatalog for VariantInventory {
    fn variant_count(&self, kind: TileKind) -> u32 {
        match kind {
            TileKind::Floor => self.floor,
            TileKind::OuterWall => self.outer_wall,
            TileKind::Wall => self.wall,
            TileKind::Food => self.food,
            TileKind::Enemy => self.enemy,
            TileKind::Exit => 1,
        }
    }
}
