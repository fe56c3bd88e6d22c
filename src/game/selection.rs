//! Click-to-select state machine for the board grid.
//!
//! Each cell is SELECTED, AVAILABLE (may be clicked next) or UNAVAILABLE.
//! With nothing selected every cell is available; otherwise only the
//! unselected neighbours of the last selected cell are.

use super::board::BoggleBoard;
use super::letters::Tile;

/// Selection status of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStatus {
    /// Cannot be clicked
    Unavailable,
    /// Not selected, may be clicked next
    Available,
    /// Part of the current word
    Selected,
}

/// One grid position as seen by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub x: usize,
    pub y: usize,
    pub tile: Tile,
    pub status: CellStatus,
}

impl GridCell {
    /// 8-directional adjacency. The test is inclusive, so a cell counts as
    /// its own neighbour.
    pub fn is_neighbor(&self, other: &GridCell) -> bool {
        self.x.abs_diff(other.x) <= 1 && self.y.abs_diff(other.y) <= 1
    }
}

/// Errors raised by the selection grid.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("the point `({x}, {y})` is out of bounds for a {size}x{size} grid")]
    OutOfBounds { x: usize, y: usize, size: usize },
    #[error("cannot display a {found}x{found} board on a {expected}x{expected} grid")]
    DimensionMismatch { expected: usize, found: usize },
}

/// Grid cells plus the ordered sequence of selected cells.
#[derive(Debug, Clone)]
pub struct SelectionMachine {
    size: usize,
    cells: Vec<GridCell>,
    /// Indices into `cells`, in click order
    sequence: Vec<usize>,
}

impl SelectionMachine {
    /// An empty grid of the given dimension. No cells exist until a board is set.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: Vec::new(),
            sequence: Vec::new(),
        }
    }

    /// Grid sized for `board`, showing it.
    pub fn with_board(board: &BoggleBoard) -> Self {
        let mut machine = Self::new(board.size());
        machine.load_cells(board);
        machine
    }

    /// Display a new board, discarding the old cells and any selection.
    pub fn set_board(&mut self, board: &BoggleBoard) -> Result<(), SelectionError> {
        if board.size() != self.size {
            return Err(SelectionError::DimensionMismatch {
                expected: self.size,
                found: board.size(),
            });
        }
        self.load_cells(board);
        Ok(())
    }

    fn load_cells(&mut self, board: &BoggleBoard) {
        self.cells = board
            .rows()
            .enumerate()
            .flat_map(|(x, row)| {
                row.iter().enumerate().map(move |(y, &tile)| GridCell {
                    x,
                    y,
                    tile,
                    status: CellStatus::Available,
                })
            })
            .collect();
        self.sequence.clear();
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&GridCell> {
        self.index_of(x, y).ok().map(|i| &self.cells[i])
    }

    pub fn status(&self, x: usize, y: usize) -> Option<CellStatus> {
        self.cell(x, y).map(|c| c.status)
    }

    /// Selected cells in click order.
    pub fn selected(&self) -> impl Iterator<Item = &GridCell> {
        self.sequence.iter().map(|&i| &self.cells[i])
    }

    pub fn selected_len(&self) -> usize {
        self.sequence.len()
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, SelectionError> {
        let out_of_bounds = SelectionError::OutOfBounds {
            x,
            y,
            size: self.size,
        };
        if x >= self.size || y >= self.size {
            return Err(out_of_bounds);
        }
        // No cells until a board is set
        let index = x * self.size + y;
        if index >= self.cells.len() {
            return Err(out_of_bounds);
        }
        Ok(index)
    }

    /// Handle a click on `(x, y)` and return the updated cells.
    ///
    /// An available cell is appended to the selection. A selected cell
    /// truncates the selection back to itself. Unavailable cells ignore
    /// the click.
    pub fn handle_click(&mut self, x: usize, y: usize) -> Result<&[GridCell], SelectionError> {
        let index = self.index_of(x, y)?;

        match self.cells[index].status {
            CellStatus::Available => {
                self.sequence.push(index);
                self.recompute();
            }
            CellStatus::Selected => {
                if let Some(pos) = self.sequence.iter().position(|&i| i == index) {
                    self.sequence.truncate(pos + 1);
                }
                self.recompute();
            }
            CellStatus::Unavailable => {
                tracing::trace!(x, y, "ignored click on unavailable cell");
            }
        }

        Ok(&self.cells)
    }

    /// Drop the most recent selection, if any.
    pub fn undo(&mut self) {
        if self.sequence.pop().is_some() {
            self.recompute();
        }
    }

    /// Clear the selection; every cell becomes available.
    pub fn reset(&mut self) {
        self.sequence.clear();
        self.recompute();
    }

    /// Tiles of the selection concatenated in click order.
    pub fn current_word(&self) -> String {
        self.selected().map(|c| c.tile.as_str()).collect()
    }

    fn recompute(&mut self) {
        let Some(&last) = self.sequence.last() else {
            for cell in &mut self.cells {
                cell.status = CellStatus::Available;
            }
            return;
        };

        for cell in &mut self.cells {
            cell.status = CellStatus::Unavailable;
        }
        for &i in &self.sequence {
            self.cells[i].status = CellStatus::Selected;
        }

        let anchor = self.cells[last].clone();
        for cell in &mut self.cells {
            if cell.status == CellStatus::Unavailable && anchor.is_neighbor(cell) {
                cell.status = CellStatus::Available;
            }
        }
    }
}
