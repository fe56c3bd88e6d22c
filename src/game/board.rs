//! Square Boggle board filled with random tiles.

use super::letters::Tile;
use rand::Rng;
use std::fmt;

/// Default board dimension (classic 4x4 Boggle).
pub const DEFAULT_SIZE: usize = 4;

/// Errors raised while building or querying a board.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board size must be at least 1 and fit in memory, got {size}")]
    InvalidSize { size: usize },
    #[error("the point `({x}, {y})` is out of bounds for a {size}x{size} board")]
    OutOfBounds { x: usize, y: usize, size: usize },
    #[error("\"{tile}\" is not a valid tile")]
    InvalidTile { tile: String },
    #[error("row {row} has {len} tiles, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
}

/// An NxN grid of tiles. `x` is the row, `y` the column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoggleBoard {
    size: usize,
    cells: Vec<Tile>,
}

/// Number of cells on a `size`x`size` board.
fn cell_count(size: usize) -> Result<usize, BoardError> {
    match size.checked_mul(size) {
        Some(count) if count > 0 => Ok(count),
        _ => Err(BoardError::InvalidSize { size }),
    }
}

impl BoggleBoard {
    /// Generate a random board using the thread RNG.
    pub fn generate(size: usize) -> Result<Self, BoardError> {
        Self::generate_with_rng(size, &mut rand::rng())
    }

    /// Generate a random board using a specific RNG (for testing/seeding).
    /// Every cell is an independent draw from the tile bag.
    pub fn generate_with_rng<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, BoardError> {
        let cells = (0..cell_count(size)?).map(|_| Tile::draw(rng)).collect();
        tracing::debug!(size, "generated board");
        Ok(Self { size, cells })
    }

    /// Build a board from explicit rows of tile faces.
    pub fn from_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self, BoardError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(cell_count(size)?);
        for (row, faces) in rows.iter().enumerate() {
            if faces.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: faces.len(),
                    size,
                });
            }
            for face in faces {
                let face = face.as_ref();
                let tile = Tile::parse(face).ok_or_else(|| BoardError::InvalidTile {
                    tile: face.to_string(),
                })?;
                cells.push(tile);
            }
        }

        Ok(Self { size, cells })
    }

    /// Board dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Tile at `(x, y)`.
    pub fn cell(&self, x: usize, y: usize) -> Result<Tile, BoardError> {
        if x >= self.size || y >= self.size {
            return Err(BoardError::OutOfBounds {
                x,
                y,
                size: self.size,
            });
        }
        Ok(self.cells[x * self.size + y])
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.size)
    }
}

impl fmt::Display for BoggleBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|t| format!("{:<2}", t)).collect();
            writeln!(f, "{}", line.join(" ").trim_end())?;
        }
        Ok(())
    }
}
