use fifteen::{
    ConfigError, Configuration, Direction, FlatGrid, FormatError, Session, SessionError,
    SessionState,
};

const SOLVED: &str = "1 2 3 4 : 5 6 7 8 : 9 10 11 12 : 13 14 15 0";
// Blank at (2, 2); LEFT then UP solves it.
const MID_BLANK: &str = "1 2 3 4 : 5 6 7 8 : 9 10 0 11 : 13 14 15 12";
// Blank at (1, 3), the right edge; UP then UP solves it, LEFT is illegal.
const EDGE_BLANK: &str = "1 2 3 4 : 5 6 7 0 : 9 10 11 8 : 13 14 15 12";
// Classified unsolvable by the parity rule.
const UNSOLVABLE: &str = "1 2 3 4 : 5 6 7 8 : 9 10 11 12 : 13 14 0 15";

fn catalog(texts: &[&str]) -> Vec<Configuration> {
    texts
        .iter()
        .map(|t| Configuration::new(*t).expect("valid text"))
        .collect()
}

fn session(texts: &[&str]) -> Session<Vec<Configuration>, FlatGrid> {
    Session::new(catalog(texts))
}

#[test]
fn selection_index_is_checked() {
    let mut s = session(&[MID_BLANK]);
    assert_eq!(
        s.load(5),
        Err(SessionError::IndexOutOfRange { index: 5, len: 1 })
    );
    assert_eq!(s.state(), SessionState::NoActivePuzzle);
}

#[test]
fn malformed_catalog_entry_fails_the_load_only() {
    let mut s = session(&["1 2 3", MID_BLANK]);
    assert_eq!(
        s.load(0),
        Err(SessionError::Config(ConfigError::Format(
            FormatError::RowCount(1)
        )))
    );
    assert_eq!(s.state(), SessionState::NoActivePuzzle);
    // The session is still usable.
    assert_eq!(s.load(1), Ok(SessionState::InProgress));
}

#[test]
fn unsolvable_configuration_is_a_distinct_signal() {
    let mut s = session(&[UNSOLVABLE]);
    assert_eq!(s.load(0), Err(SessionError::Unsolvable));
    assert_eq!(s.state(), SessionState::NoActivePuzzle);
    assert!(s.board().is_none());
}

#[test]
fn load_resets_history_to_the_initial_board() {
    let mut s = session(&[MID_BLANK]);
    assert_eq!(s.load(0), Ok(SessionState::InProgress));
    assert_eq!(s.history().len(), 1);
    let board = s.board().expect("active board");
    assert_eq!(board.move_count(), 0);
    assert_eq!(&s.history()[0], board);
}

#[test]
fn loading_a_solved_configuration_finishes_immediately() {
    let mut s = session(&[SOLVED]);
    assert_eq!(s.load(0), Ok(SessionState::Solved));
    assert!(s.board().is_none());
    assert_eq!(s.history().len(), 1);
    assert!(s.history()[0].is_solved());
}

#[test]
fn moves_require_an_active_puzzle() {
    let mut s = session(&[MID_BLANK]);
    assert_eq!(s.apply(Direction::Up), Err(SessionError::NoActivePuzzle));
    assert_eq!(s.undo(), Err(SessionError::NoActivePuzzle));
    assert_eq!(s.redo(), Err(SessionError::NoActivePuzzle));
}

#[test]
fn illegal_move_is_reported_and_not_recorded() {
    let mut s = session(&[EDGE_BLANK]);
    s.load(0).expect("loads");
    let before = s.board().expect("active board").clone();
    let result = s.apply(Direction::Left);
    assert!(matches!(result, Err(SessionError::OutOfBoard(_))));
    assert_eq!(s.state(), SessionState::InProgress);
    assert_eq!(s.history().len(), 1);
    assert_eq!(s.board().expect("active board"), &before);
}

#[test]
fn undo_fails_on_a_fresh_puzzle() {
    let mut s = session(&[MID_BLANK]);
    s.load(0).expect("loads");
    assert_eq!(s.undo(), Err(SessionError::AtHistoryStart));
}

#[test]
fn redo_fails_at_the_history_head() {
    let mut s = session(&[MID_BLANK]);
    s.load(0).expect("loads");
    assert_eq!(s.redo(), Err(SessionError::AtHistoryEnd));
    s.apply(Direction::Down).expect("legal move");
    assert_eq!(s.redo(), Err(SessionError::AtHistoryEnd));
}

#[test]
fn undo_then_redo_restores_the_exact_state() {
    let mut s = session(&[MID_BLANK]);
    s.load(0).expect("loads");
    s.apply(Direction::Down).expect("legal move");
    s.apply(Direction::Right).expect("legal move");
    assert_eq!(s.history().len(), 3);
    let latest = s.board().expect("active board").clone();

    s.undo().expect("one move back");
    assert_eq!(s.board().expect("active board").move_count(), 1);
    s.redo().expect("forward again");
    assert_eq!(s.board().expect("active board"), &latest);

    s.undo().expect("one move back");
    s.undo().expect("back to the initial board");
    assert_eq!(s.board().expect("active board").move_count(), 0);
    assert_eq!(s.undo(), Err(SessionError::AtHistoryStart));
}

#[test]
fn a_move_after_undo_drops_the_redo_tail() {
    let mut s = session(&[MID_BLANK]);
    s.load(0).expect("loads");
    s.apply(Direction::Down).expect("legal move");
    s.apply(Direction::Right).expect("legal move");
    let abandoned = s.history()[2].clone();

    s.undo().expect("one move back");
    s.apply(Direction::Up).expect("legal move");
    assert_eq!(s.history().len(), 3);
    assert_ne!(s.history()[2], abandoned);
    assert_eq!(&s.history()[2], s.board().expect("active board"));
    assert_eq!(s.redo(), Err(SessionError::AtHistoryEnd));
}

#[test]
fn solving_clears_the_active_board() {
    let mut s = session(&[MID_BLANK]);
    s.load(0).expect("loads");
    s.apply(Direction::Left).expect("legal move");
    assert_eq!(s.apply(Direction::Up), Ok(SessionState::Solved));
    assert!(s.board().is_none());
    assert_eq!(s.history().len(), 3);
    assert!(s.history()[2].is_solved());
    // The finished puzzle accepts no further commands.
    assert_eq!(s.apply(Direction::Down), Err(SessionError::NoActivePuzzle));
    assert_eq!(s.undo(), Err(SessionError::NoActivePuzzle));
}

#[test]
fn loading_again_replaces_a_finished_puzzle() {
    let mut s = session(&[MID_BLANK, EDGE_BLANK]);
    s.load(0).expect("loads");
    s.apply(Direction::Left).expect("legal move");
    s.apply(Direction::Up).expect("legal move");
    assert_eq!(s.state(), SessionState::Solved);

    assert_eq!(s.load(1), Ok(SessionState::InProgress));
    assert_eq!(s.history().len(), 1);
    assert_eq!(s.board().expect("active board").move_count(), 0);
}
