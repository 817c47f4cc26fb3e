use crate::board::{Board, FlatGrid, TileGrid};
use crate::config::Configuration;
use crate::error::SessionError;
use crate::types::Direction;

/// Read-only catalog of configurations a session can load from. The core
/// never performs I/O; concrete stores live behind this trait.
pub trait Catalog {
    /// Ordered catalog entries.
    fn configurations(&self) -> &[Configuration];

    #[inline]
    fn len(&self) -> usize {
        self.configurations().len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.configurations().is_empty()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&Configuration> {
        self.configurations().get(index)
    }
}

/// In-memory catalogs; mainly useful in tests and demos.
impl Catalog for Vec<Configuration> {
    #[inline]
    fn configurations(&self) -> &[Configuration] {
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NoActivePuzzle,
    InProgress,
    Solved,
}

/// One puzzle-playing instance: the active board plus the linear history of
/// board snapshots used for undo/redo.
///
/// `history[k]` is always the board state after k moves, starting with the
/// just-loaded board at `history[0]`; the active board's move count is its
/// index into the history. A move made after an undo truncates the redo
/// tail before the new snapshot is appended, so the invariant holds across
/// rollbacks.
#[derive(Debug)]
pub struct Session<C: Catalog, G: TileGrid = FlatGrid> {
    catalog: C,
    board: Option<Board<G>>,
    history: Vec<Board<G>>,
    solved: bool,
}

impl<C: Catalog, G: TileGrid> Session<C, G> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            board: None,
            history: Vec::new(),
            solved: false,
        }
    }

    #[inline]
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// The active board, absent before the first load and after a solve.
    #[inline]
    pub fn board(&self) -> Option<&Board<G>> {
        self.board.as_ref()
    }

    /// Snapshots recorded for the current puzzle, oldest first.
    #[inline]
    pub fn history(&self) -> &[Board<G>] {
        &self.history
    }

    pub fn state(&self) -> SessionState {
        if self.board.is_some() {
            SessionState::InProgress
        } else if self.solved {
            SessionState::Solved
        } else {
            SessionState::NoActivePuzzle
        }
    }

    /// Loads the catalog entry at `index`, replacing any active puzzle and
    /// resetting the history to the initial snapshot. Fails without touching
    /// the session on a bad index, malformed or invalid configuration, or a
    /// configuration classified unsolvable. A configuration that is already
    /// solved transitions straight to `Solved`.
    pub fn load(&mut self, index: usize) -> Result<SessionState, SessionError> {
        let config = self
            .catalog
            .get(index)
            .cloned()
            .ok_or(SessionError::IndexOutOfRange {
                index,
                len: self.catalog.len(),
            })?;
        let board = Board::<G>::from_config(&config)?;
        if !board.is_solvable() {
            return Err(SessionError::Unsolvable);
        }
        self.solved = board.is_solved();
        self.history = vec![board.clone()];
        self.board = if self.solved { None } else { Some(board) };
        Ok(self.state())
    }

    /// Delegates the move to the active board. An illegal move surfaces the
    /// board's error, leaves the state unchanged and records nothing; a
    /// legal move appends a snapshot of the new state (dropping any redo
    /// tail first). Reaching the solved state clears the active board.
    pub fn apply(&mut self, direction: Direction) -> Result<SessionState, SessionError> {
        let board = self.board.as_mut().ok_or(SessionError::NoActivePuzzle)?;
        board.slide(direction)?;
        let snapshot = board.clone();
        let solved = snapshot.is_solved();
        self.history.truncate(snapshot.move_count() as usize);
        self.history.push(snapshot);
        if solved {
            self.solved = true;
            self.board = None;
        }
        Ok(self.state())
    }

    /// Steps the active board back to the previous snapshot.
    pub fn undo(&mut self) -> Result<(), SessionError> {
        let board = self.board.as_ref().ok_or(SessionError::NoActivePuzzle)?;
        let count = board.move_count() as usize;
        if count == 0 {
            return Err(SessionError::AtHistoryStart);
        }
        self.board = Some(self.history[count - 1].clone());
        Ok(())
    }

    /// Steps the active board forward to the next snapshot, if one survives
    /// past the current position.
    pub fn redo(&mut self) -> Result<(), SessionError> {
        let board = self.board.as_ref().ok_or(SessionError::NoActivePuzzle)?;
        let count = board.move_count() as usize;
        if count + 1 >= self.history.len() {
            return Err(SessionError::AtHistoryEnd);
        }
        self.board = Some(self.history[count + 1].clone());
        Ok(())
    }
}
