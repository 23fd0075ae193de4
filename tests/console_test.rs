//! Transcript tests for the console front-end.

use noughts::{ConsoleController, ConsoleError, GameEngine, Mark, Outcome, Session};
use std::io::{self, Write};

const EMPTY: &str = "   |   |  \n-----------\n   |   |  \n-----------\n   |   |  \n";
const CENTER_X: &str = "   |   |  \n-----------\n   | X |  \n-----------\n   |   |  \n";

fn play(input: &str) -> (Result<Session, ConsoleError>, String, GameEngine) {
    let mut engine = GameEngine::new();
    let mut console = ConsoleController::new(input.as_bytes(), Vec::new());
    let result = console.play_game(&mut engine);
    let transcript = String::from_utf8(console.into_output()).expect("utf-8 transcript");
    (result, transcript, engine)
}

#[test]
fn test_single_valid_move_then_quit() {
    let (result, transcript, _) = play("2 2 q");
    assert_eq!(result.unwrap(), Session::Quit);
    let expected = [
        EMPTY,
        "Enter a move for X:\n",
        CENTER_X,
        "Enter a move for O:\n",
        "Game quit! Ending game state:\n",
        CENTER_X,
    ]
    .concat();
    assert_eq!(transcript, expected);
}

#[test]
fn test_bogus_row_token() {
    let (result, transcript, _) = play("!#$ 2 q");
    assert_eq!(result.unwrap(), Session::Quit);

    let lines: Vec<_> = transcript.lines().collect();
    assert_eq!(lines.len(), 13);
    assert_eq!(lines[6], "Not a valid number: !#$");
    assert_eq!(
        lines[7..].join("\n"),
        "Game quit! Ending game state:\n   |   |  \n-----------\n   |   |  \n-----------\n   |   |  "
    );
}

#[test]
fn test_quit_in_row_position() {
    let (result, transcript, engine) = play("2 2 q 1 1 3");
    assert_eq!(result.unwrap(), Session::Quit);
    assert!(transcript.ends_with(&format!("Game quit! Ending game state:\n{}", CENTER_X)));
    assert_eq!(engine.move_count(), 1);
}

#[test]
fn test_quit_in_column_position() {
    let (result, transcript, engine) = play("2 2 1 q 1 3");
    assert_eq!(result.unwrap(), Session::Quit);
    let expected = [
        EMPTY,
        "Enter a move for X:\n",
        CENTER_X,
        "Enter a move for O:\n",
        "Game quit! Ending game state:\n",
        CENTER_X,
    ]
    .concat();
    assert_eq!(transcript, expected);
    assert_eq!(engine.mark_at(0, 0).unwrap(), None);
}

#[test]
fn test_uppercase_quit() {
    let (result, _, _) = play("Q");
    assert_eq!(result.unwrap(), Session::Quit);
}

#[test]
fn test_garbage_in_row_position() {
    let (_, transcript, _) = play("1 1 JAVA! 2 2 q");
    let x_corner = " X |   |  \n-----------\n   |   |  \n-----------\n   |   |  \n";
    let both = " X |   |  \n-----------\n   | O |  \n-----------\n   |   |  \n";
    let expected = [
        EMPTY,
        "Enter a move for X:\n",
        x_corner,
        "Enter a move for O:\n",
        "Not a valid number: JAVA!\n",
        both,
        "Enter a move for X:\n",
        "Game quit! Ending game state:\n",
        both,
    ]
    .concat();
    assert_eq!(transcript, expected);
}

#[test]
fn test_garbage_in_column_position() {
    let (_, transcript, _) = play("1 JAVA! 1 2 2 q");
    let x_corner = " X |   |  \n-----------\n   |   |  \n-----------\n   |   |  \n";
    let both = " X |   |  \n-----------\n   | O |  \n-----------\n   |   |  \n";
    let expected = [
        EMPTY,
        "Enter a move for X:\n",
        "Not a valid number: JAVA!\n",
        x_corner,
        "Enter a move for O:\n",
        both,
        "Enter a move for X:\n",
        "Game quit! Ending game state:\n",
        both,
    ]
    .concat();
    assert_eq!(transcript, expected);
}

#[test]
fn test_out_of_bounds_move() {
    let (_, transcript, _) = play("2 5 2 2 Q");
    let expected = [
        EMPTY,
        "Enter a move for X:\n",
        "Not a valid move: 2, 5\n",
        EMPTY,
        "Enter a move for X:\n",
        CENTER_X,
        "Enter a move for O:\n",
        "Game quit! Ending game state:\n",
        CENTER_X,
    ]
    .concat();
    assert_eq!(transcript, expected);
}

#[test]
fn test_zero_and_negative_are_out_of_bounds() {
    let (_, transcript, engine) = play("0 1 -1 2 q");
    assert!(transcript.contains("Not a valid move: 0, 1\n"));
    assert!(transcript.contains("Not a valid move: -1, 2\n"));
    assert_eq!(engine.move_count(), 0);
}

#[test]
fn test_occupied_cell() {
    let (_, transcript, _) = play("2 2 2 2 1 1 Q");
    let o_corner = " O |   |  \n-----------\n   | X |  \n-----------\n   |   |  \n";
    let expected = [
        EMPTY,
        "Enter a move for X:\n",
        CENTER_X,
        "Enter a move for O:\n",
        "Not a valid move: 2, 2\n",
        CENTER_X,
        "Enter a move for O:\n",
        o_corner,
        "Enter a move for X:\n",
        "Game quit! Ending game state:\n",
        o_corner,
    ]
    .concat();
    assert_eq!(transcript, expected);
}

#[test]
fn test_multiple_invalid_moves_in_a_row() {
    let (_, transcript, _) = play("2 2 5 2 JAVA! 2 2 2 1 1 Q");
    let o_left = "   |   |  \n-----------\n O | X |  \n-----------\n   |   |  \n";
    let expected = [
        EMPTY,
        "Enter a move for X:\n",
        CENTER_X,
        "Enter a move for O:\n",
        "Not a valid move: 5, 2\n",
        CENTER_X,
        "Enter a move for O:\n",
        "Not a valid number: JAVA!\n",
        "Not a valid move: 2, 2\n",
        CENTER_X,
        "Enter a move for O:\n",
        o_left,
        "Enter a move for X:\n",
        "Game quit! Ending game state:\n",
        o_left,
    ]
    .concat();
    assert_eq!(transcript, expected);
}

#[test]
fn test_tie_game() {
    let (result, transcript, engine) = play("2 2 1 1 3 3 1 2 1 3 2 3 2 1 3 1 3 2");
    assert_eq!(result.unwrap(), Session::Finished(Outcome::Tie));
    let lines: Vec<_> = transcript.lines().collect();
    assert_eq!(lines.len(), 60);
    assert_eq!(lines[lines.len() - 1], "Game is over! Tie game.");
    assert!(engine.is_game_over());
}

#[test]
fn test_x_wins() {
    let (result, transcript, engine) = play("1 1 2 1 1 2 2 2 2 3 3 1 3 2 3 3 1 3");
    assert!(matches!(result, Ok(Session::Finished(Outcome::Win { mark: Mark::X, .. }))));
    let lines: Vec<_> = transcript.lines().collect();
    assert_eq!(lines.len(), 60);
    assert_eq!(lines[lines.len() - 1], "Game is over! X wins.");
    assert_eq!(engine.winner(), Some(Mark::X));
}

#[test]
fn test_o_wins() {
    let (result, transcript, _) = play("1 2 1 1 2 1 2 2 2 3 1 3 3 2 3 1");
    assert!(matches!(result, Ok(Session::Finished(Outcome::Win { mark: Mark::O, .. }))));
    let lines: Vec<_> = transcript.lines().collect();
    assert_eq!(lines.len(), 54);
    assert_eq!(lines[lines.len() - 1], "Game is over! O wins.");
}

#[test]
fn test_tokens_span_lines() {
    let (result, _, engine) = play("2\n2\n\n  1   1\nq\n");
    assert_eq!(result.unwrap(), Session::Quit);
    assert_eq!(engine.move_count(), 2);
    assert_eq!(engine.mark_at(0, 0).unwrap(), Some(Mark::O));
}

#[test]
fn test_input_exhausted_before_game_end() {
    let (result, transcript, engine) = play("1 1 2 2");
    assert!(matches!(result, Err(ConsoleError::InputExhausted)));
    assert_eq!(engine.move_count(), 2);
    assert!(transcript.ends_with("Enter a move for X:\n"));
}

#[test]
fn test_input_exhausted_mid_pair() {
    let (result, _, engine) = play("1");
    assert!(matches!(result, Err(ConsoleError::InputExhausted)));
    assert_eq!(engine.move_count(), 0);
}

#[test]
fn test_already_finished_game_reports_result() {
    let mut engine = GameEngine::new();
    for (row, col) in [(0, 0), (1, 0), (0, 1), (2, 0), (0, 2)] {
        engine.apply_move(row, col).unwrap();
    }
    let mut console = ConsoleController::new("".as_bytes(), Vec::new());
    let result = console.play_game(&mut engine).unwrap();
    assert_eq!(result, Session::Finished(engine.outcome().unwrap()));

    let transcript = String::from_utf8(console.into_output()).unwrap();
    assert_eq!(
        transcript,
        " X | X | X\n-----------\n O |   |  \n-----------\n O |   |  \nGame is over! X wins.\n"
    );
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::other("sink closed"))
    }
}

#[test]
fn test_failing_output_is_an_error() {
    let mut engine = GameEngine::new();
    let mut console = ConsoleController::new("2 2 1 1 3 3".as_bytes(), FailingWriter);
    let result = console.play_game(&mut engine);
    assert!(matches!(result, Err(ConsoleError::Io(_))));
}
