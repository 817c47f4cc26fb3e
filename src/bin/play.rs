use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use fifteen::{
    Board, Catalog, ConfigurationStore, Direction, FlatGrid, MatrixGrid, Session, SessionError,
    SessionState, TileGrid, EMPTY, SIZE,
};

/// Interactive 15-puzzle console.
#[derive(Debug, Parser)]
#[command(name = "play", about = "Play 15-puzzle configurations from a store file")]
struct Args {
    /// Path to the configuration store.
    source: PathBuf,
    /// Treat the store as a JSON array instead of one configuration per line.
    #[arg(long)]
    json: bool,
    /// Use the matrix board layout instead of the flat array.
    #[arg(long)]
    matrix: bool,
}

fn render<G: TileGrid>(board: &Board<G>) {
    println!("- {} move(s)", board.move_count());
    let rule = "-".repeat(SIZE * 5 + 1);
    for row in 0..SIZE {
        println!("{rule}");
        for col in 0..SIZE {
            // In-range accesses only; the error arm is unreachable here.
            match board.get_tile(row, col) {
                Ok(EMPTY) => print!("|    "),
                Ok(value) => print!("| {value:>2} "),
                Err(_) => print!("| ?? "),
            }
        }
        println!("|");
    }
    println!("{rule}");
}

fn prompt_select() {
    println!("Please select a configuration to play (l to list):");
}

fn prompt_move() {
    println!("Please make a move by inputting UP, DOWN, LEFT, RIGHT;");
    println!("or undo with b, redo with f, or stop the game by inputting q:");
}

fn report(err: &SessionError) {
    match err {
        SessionError::OutOfBoard(_) => {
            println!("Move position out of board. Please try again.");
        }
        SessionError::NoActivePuzzle => prompt_select(),
        SessionError::AtHistoryStart => println!("This is the initial board."),
        SessionError::AtHistoryEnd => println!("This is the current board."),
        SessionError::Unsolvable => println!("The puzzle is not solvable."),
        SessionError::IndexOutOfRange { index, len } => {
            println!("No configuration {index}; the store holds {len}.");
        }
        SessionError::Config(e) => println!("Bad configuration: {e}"),
    }
}

fn run<G: TileGrid>(store: ConfigurationStore) -> io::Result<()> {
    let mut session: Session<ConfigurationStore, G> = Session::new(store);
    let stdin = io::stdin();
    prompt_select();
    for line in stdin.lock().lines() {
        let line = line?;
        let command = line.trim();
        match command {
            "" => {}
            "q" => break,
            "l" => {
                for (i, config) in session.catalog().configurations().iter().enumerate() {
                    println!("{i} ({config})");
                }
            }
            "b" => match session.undo() {
                Ok(()) => {
                    if let Some(board) = session.board() {
                        render(board);
                    }
                }
                Err(e) => report(&e),
            },
            "f" => match session.redo() {
                Ok(()) => {
                    if let Some(board) = session.board() {
                        render(board);
                    }
                }
                Err(e) => report(&e),
            },
            _ => {
                if let Some(rest) = command.strip_prefix('c') {
                    select(&mut session, rest.trim());
                } else if let Ok(direction) = command.parse::<Direction>() {
                    step(&mut session, direction);
                } else {
                    println!("Unknown command `{command}`.");
                }
            }
        }
        io::stdout().flush()?;
    }
    println!("Ending the game.");
    Ok(())
}

fn select<G: TileGrid>(session: &mut Session<ConfigurationStore, G>, text: &str) {
    let Ok(index) = text.parse::<usize>() else {
        println!("Usage: c <index>");
        return;
    };
    match session.load(index) {
        Ok(SessionState::Solved) => {
            println!("You solved the puzzle!");
            prompt_select();
        }
        Ok(_) => {
            if let Some(board) = session.board() {
                render(board);
            }
            prompt_move();
        }
        Err(e) => {
            report(&e);
            prompt_select();
        }
    }
}

fn step<G: TileGrid>(session: &mut Session<ConfigurationStore, G>, direction: Direction) {
    match session.apply(direction) {
        Ok(SessionState::Solved) => {
            println!("You solved the puzzle!");
            prompt_select();
        }
        Ok(_) => {
            if let Some(board) = session.board() {
                render(board);
            }
            prompt_move();
        }
        Err(e) => report(&e),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let store = if args.json {
        ConfigurationStore::from_json_path(&args.source)
    } else {
        ConfigurationStore::from_text_path(&args.source)
    };
    let store = match store {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to load configuration store: {e}");
            return ExitCode::FAILURE;
        }
    };
    let result = if args.matrix {
        run::<MatrixGrid>(store)
    } else {
        run::<FlatGrid>(store)
    };
    if let Err(e) = result {
        eprintln!("I/O error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
