//! Single-line board layout encoding for copy/paste sharing.

use std::{error::Error, fmt};

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};
use forage_core::{BoardDimensions, Placement};
use serde::{Deserialize, Serialize};

const SNAPSHOT_DOMAIN: &str = "forage";
const SNAPSHOT_VERSION: &str = "v1";

/// Identifier prefix emitted before the encoded placement payload.
pub(crate) const SNAPSHOT_HEADER: &str = "forage:v1";
/// Delimiter separating the prefix, grid dimensions and payload.
const FIELD_DELIMITER: char = ':';

/// Captured board layout: dimensions plus the full placement sequence in
/// its original emission order.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct BoardLayoutSnapshot {
    columns: u32,
    rows: u32,
    placements: Vec<Placement>,
}

impl BoardLayoutSnapshot {
    /// Captures a snapshot of a generated layout.
    pub(crate) fn new(dimensions: BoardDimensions, placements: Vec<Placement>) -> Self {
        Self {
            columns: dimensions.columns(),
            rows: dimensions.rows(),
            placements,
        }
    }

    /// Board dimensions the layout was generated for.
    pub(crate) fn dimensions(&self) -> BoardDimensions {
        BoardDimensions::new(self.columns, self.rows)
    }

    /// Placement sequence preserving the layering order.
    pub(crate) fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Encodes the snapshot into a single-line string suitable for sharing.
    #[must_use]
    pub(crate) fn encode(&self) -> String {
        let payload = SnapshotPayload {
            placements: self.placements.clone(),
        };
        let json = serde_json::to_vec(&payload).expect("placement serialization never fails");
        let encoded = STANDARD_NO_PAD.encode(json);
        format!("{SNAPSHOT_HEADER}:{}x{}:{encoded}", self.columns, self.rows)
    }

    /// Decodes a snapshot from the provided string representation.
    pub(crate) fn decode(value: &str) -> Result<Self, LayoutTransferError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(LayoutTransferError::EmptyPayload);
        }

        let mut parts = trimmed.split(FIELD_DELIMITER);
        let domain = parts
            .next()
            .ok_or(LayoutTransferError::MissingSegment("prefix"))?;
        let version = parts
            .next()
            .ok_or(LayoutTransferError::MissingSegment("version"))?;
        let dimensions = parts
            .next()
            .ok_or(LayoutTransferError::MissingSegment("dimensions"))?;
        let payload = parts
            .next()
            .ok_or(LayoutTransferError::MissingSegment("payload"))?;

        if domain != SNAPSHOT_DOMAIN {
            return Err(LayoutTransferError::InvalidPrefix(domain.to_owned()));
        }
        if version != SNAPSHOT_VERSION {
            return Err(LayoutTransferError::UnsupportedVersion(version.to_owned()));
        }

        let (columns, rows) = parse_dimensions(dimensions)?;
        let bytes = STANDARD_NO_PAD
            .decode(payload.as_bytes())
            .map_err(LayoutTransferError::InvalidEncoding)?;
        let decoded: SnapshotPayload =
            serde_json::from_slice(&bytes).map_err(LayoutTransferError::InvalidPayload)?;
        let placements = decoded.placements;

        for placement in &placements {
            if !within_padded_rectangle(columns, rows, placement) {
                return Err(LayoutTransferError::PlacementOutOfBounds {
                    x: placement.cell().x(),
                    y: placement.cell().y(),
                });
            }
        }

        Ok(Self {
            columns,
            rows,
            placements,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct SnapshotPayload {
    placements: Vec<Placement>,
}

/// Errors that can occur while decoding shared layout strings.
#[derive(Debug)]
pub(crate) enum LayoutTransferError {
    /// The provided string was empty or contained only whitespace.
    EmptyPayload,
    /// A required segment was missing from the encoded layout.
    MissingSegment(&'static str),
    /// The encoded layout used an unexpected prefix segment.
    InvalidPrefix(String),
    /// The encoded layout used an unsupported version identifier.
    UnsupportedVersion(String),
    /// The grid dimensions could not be parsed from the encoded layout.
    InvalidDimensions(String),
    /// The base64 payload could not be decoded.
    InvalidEncoding(base64::DecodeError),
    /// The decoded payload could not be deserialised.
    InvalidPayload(serde_json::Error),
    /// A decoded placement sits outside the padded board rectangle.
    PlacementOutOfBounds {
        /// Horizontal coordinate of the offending placement.
        x: i32,
        /// Vertical coordinate of the offending placement.
        y: i32,
    },
}

impl fmt::Display for LayoutTransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPayload => write!(f, "layout string was empty"),
            Self::MissingSegment(segment) => {
                write!(f, "layout string is missing the {segment} segment")
            }
            Self::InvalidPrefix(prefix) => write!(f, "layout prefix '{prefix}' is not supported"),
            Self::UnsupportedVersion(version) => {
                write!(f, "layout version '{version}' is not supported")
            }
            Self::InvalidDimensions(dimensions) => {
                write!(f, "could not parse grid dimensions '{dimensions}'")
            }
            Self::InvalidEncoding(error) => {
                write!(f, "could not decode layout payload: {error}")
            }
            Self::InvalidPayload(error) => {
                write!(f, "could not parse layout payload: {error}")
            }
            Self::PlacementOutOfBounds { x, y } => {
                write!(f, "placement at ({x}, {y}) falls outside the board")
            }
        }
    }
}

impl Error for LayoutTransferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidEncoding(error) => Some(error),
            Self::InvalidPayload(error) => Some(error),
            _ => None,
        }
    }
}

fn parse_dimensions(dimensions: &str) -> Result<(u32, u32), LayoutTransferError> {
    let (columns, rows) = dimensions
        .split_once(['x', 'X'])
        .ok_or_else(|| LayoutTransferError::InvalidDimensions(dimensions.to_owned()))?;

    let columns = columns
        .trim()
        .parse::<u32>()
        .map_err(|_| LayoutTransferError::InvalidDimensions(dimensions.to_owned()))?;
    let rows = rows
        .trim()
        .parse::<u32>()
        .map_err(|_| LayoutTransferError::InvalidDimensions(dimensions.to_owned()))?;

    if columns == 0 || rows == 0 {
        return Err(LayoutTransferError::InvalidDimensions(
            dimensions.to_owned(),
        ));
    }

    Ok((columns, rows))
}

fn within_padded_rectangle(columns: u32, rows: u32, placement: &Placement) -> bool {
    let x = i64::from(placement.cell().x());
    let y = i64::from(placement.cell().y());
    (-1..=i64::from(columns)).contains(&x) && (-1..=i64::from(rows)).contains(&y)
}

#[cfg(test)]
mod tests {
    use super::{BoardLayoutSnapshot, LayoutTransferError, SNAPSHOT_HEADER};
    use forage_core::{BoardDimensions, GridCoord, Placement, TileKind};

    fn sample_snapshot() -> BoardLayoutSnapshot {
        let placements = vec![
            Placement::new(GridCoord::new(-1, -1), TileKind::OuterWall, 2),
            Placement::new(GridCoord::new(0, 0), TileKind::Floor, 5),
            Placement::new(GridCoord::new(3, 2), TileKind::Wall, 1),
            Placement::new(GridCoord::new(4, 1), TileKind::Food, 0),
            Placement::new(GridCoord::new(7, 7), TileKind::Exit, 0),
        ];
        BoardLayoutSnapshot::new(BoardDimensions::new(8, 8), placements)
    }

    #[test]
    fn round_trip_preserves_layout() {
        let snapshot = sample_snapshot();
        let encoded = snapshot.encode();
        assert!(encoded.starts_with(&format!("{SNAPSHOT_HEADER}:8x8:")));

        let decoded = BoardLayoutSnapshot::decode(&encoded).expect("snapshot decodes");
        assert_eq!(snapshot, decoded);
    }

    #[test]
    fn round_trip_empty_board() {
        let snapshot = BoardLayoutSnapshot::new(BoardDimensions::new(5, 4), Vec::new());
        let decoded = BoardLayoutSnapshot::decode(&snapshot.encode()).expect("snapshot decodes");
        assert_eq!(decoded.placements().len(), 0);
        assert_eq!(decoded.dimensions(), BoardDimensions::new(5, 4));
    }

    #[test]
    fn empty_string_is_rejected() {
        assert!(matches!(
            BoardLayoutSnapshot::decode("   "),
            Err(LayoutTransferError::EmptyPayload),
        ));
    }

    #[test]
    fn foreign_prefix_is_rejected() {
        let encoded = sample_snapshot().encode().replacen("forage", "orchard", 1);
        assert!(matches!(
            BoardLayoutSnapshot::decode(&encoded),
            Err(LayoutTransferError::InvalidPrefix(_)),
        ));
    }

    #[test]
    fn future_version_is_rejected() {
        let encoded = sample_snapshot().encode().replacen(":v1:", ":v9:", 1);
        assert!(matches!(
            BoardLayoutSnapshot::decode(&encoded),
            Err(LayoutTransferError::UnsupportedVersion(_)),
        ));
    }

    #[test]
    fn malformed_dimensions_are_rejected() {
        let encoded = sample_snapshot().encode().replacen(":8x8:", ":8by8:", 1);
        assert!(matches!(
            BoardLayoutSnapshot::decode(&encoded),
            Err(LayoutTransferError::InvalidDimensions(_)),
        ));
    }

    #[test]
    fn out_of_bounds_placement_is_rejected() {
        let placements = vec![Placement::new(GridCoord::new(9, 0), TileKind::Wall, 0)];
        let snapshot = BoardLayoutSnapshot::new(BoardDimensions::new(8, 8), placements);
        assert!(matches!(
            BoardLayoutSnapshot::decode(&snapshot.encode()),
            Err(LayoutTransferError::PlacementOutOfBounds { x: 9, y: 0 }),
        ));
    }
}
