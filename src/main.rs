use anyhow::Result;

use std::cmp::Ordering;
use std::io::{stdin, stdout, Write};

use connect_four_ai::board::{ArrayBoard, BoardStatus};
use connect_four_ai::position::{Player, Position};
use connect_four_ai::search::{minimax_alpha_beta, Score, DEFAULT_DEPTH, SCORE_NEG_INF};
use connect_four_ai::WIDTH;

/// Picks the move for `player` scoring best at the default search depth
///
/// The search only grades positions, so move selection happens here: play
/// every legal column on a copy of the board, score the result, and keep
/// the first highest-scoring column.
fn choose_move(board: &ArrayBoard, player: Player) -> (usize, Score) {
    let mut best_column = 0;
    let mut best_score = SCORE_NEG_INF;

    for column in 1..=WIDTH {
        if !board.playable(column - 1) {
            continue;
        }
        let mut successor = board.clone();
        if successor.play_checked(column).is_err() {
            continue;
        }
        let score = minimax_alpha_beta(&successor, DEFAULT_DEPTH, player);
        if score > best_score {
            best_score = score;
            best_column = column;
        }
    }

    (best_column, best_score)
}

fn main() -> Result<()> {
    let mut board = ArrayBoard::new();

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    let mut ai_players = (false, false);

    // choose AI control of player 1
    loop {
        let mut buffer = String::new();
        print!("Is player 1 AI controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                ai_players.0 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // choose AI control of player 2
    loop {
        let mut buffer = String::new();
        print!("Is player 2 AI controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                ai_players.1 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // game loop
    loop {
        board.display().expect("Failed to draw board!");

        match board.status {
            BoardStatus::Playing => {
                let to_move = board.to_move();
                let ai_turn = match to_move {
                    Player::One => ai_players.0,
                    Player::Two => ai_players.1,
                };

                let next_move =
                    // AI player
                    if ai_turn {
                        println!("AI is thinking...");
                        stdout().flush().expect("Failed to flush to stdout!");

                        // slow down play if both players are AI
                        if ai_players == (true, true) {
                            std::thread::sleep(std::time::Duration::new(1, 0));
                        }

                        let (best_move, score) = choose_move(&board, to_move);

                        match score.cmp(&0) {
                            Ordering::Greater => {
                                println!("AI expects to be ahead.");
                            }
                            Ordering::Less => {
                                println!("AI expects to be behind.");
                            }
                            Ordering::Equal => {
                                println!("AI expects a balanced game.");
                            }
                        }

                        println!("Best move: {}", best_move);
                        best_move

                    // human player
                    } else {
                        print!("Move input > ");
                        stdout().flush().expect("Failed to flush to stdout!");
                        let mut input_str = String::new();
                        stdin.read_line(&mut input_str)?;

                        match input_str.trim().parse::<usize>() {
                            Err(_) => {
                                println!("Invalid number: {}", input_str);
                                continue;
                            }
                            Ok(column) => column,
                        }
                    };

                if let Err(err) = board.play_checked(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            BoardStatus::Won(Player::One) => {
                println!("Player 1 wins!");
                break;
            }
            BoardStatus::Won(Player::Two) => {
                println!("Player 2 wins!");
                break;
            }
            BoardStatus::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
