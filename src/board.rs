//! A concrete Connect 4 board implementing the search contract

use anyhow::{anyhow, Result};
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use crate::position::{Player, Position};
use crate::{HEIGHT, WIDTH, WIN_LENGTH};

// the four direction families runs are counted along: horizontal,
// vertical and the two diagonals
const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Whether the game is still running or has been decided
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum BoardStatus {
    Playing,
    Won(Player),
    Draw,
}

#[derive(Clone)]
pub struct ArrayBoard {
    cells: [Option<Player>; WIDTH * HEIGHT], // cells are stored left-to-right, bottom-to-top
    heights: [usize; WIDTH],
    to_move: Player,
    num_moves: usize,
    pub status: BoardStatus,
}

impl ArrayBoard {
    pub fn new() -> Self {
        Self {
            cells: [None; WIDTH * HEIGHT],
            heights: [0; WIDTH],
            to_move: Player::One,
            num_moves: 0,
            status: BoardStatus::Playing,
        }
    }

    /// Builds a board by replaying a string of one-indexed column digits
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10) {
                Some(column) => {
                    let _ = board.play_checked(column as usize)?;
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<BoardStatus> {
        if self.status != BoardStatus::Playing {
            return Err(anyhow!("Invalid move, game is over"));
        }
        if column_one_indexed < 1 || column_one_indexed > WIDTH {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                WIDTH
            ));
        }
        let column = column_one_indexed - 1;
        if !self.playable(column) {
            return Err(anyhow!("Invalid move, column {} full", column_one_indexed));
        }

        if self.check_winning_move(column) {
            self.status = BoardStatus::Won(self.to_move);
        } else if self.num_moves + 1 == WIDTH * HEIGHT {
            self.status = BoardStatus::Draw;
        }
        self.play(column);

        Ok(self.status)
    }

    pub fn playable(&self, column: usize) -> bool {
        self.heights[column] < HEIGHT
    }

    fn play(&mut self, column: usize) {
        self.cells[column + WIDTH * self.heights[column]] = Some(self.to_move);
        self.heights[column] += 1;
        self.num_moves += 1;
        self.to_move = self.to_move.opponent();
    }

    fn cell(&self, x: i32, y: i32) -> Option<Player> {
        if x < 0 || x >= WIDTH as i32 || y < 0 || y >= HEIGHT as i32 {
            return None;
        }
        self.cells[x as usize + WIDTH * y as usize]
    }

    /// Returns whether dropping a tile in `column` wins for the side to move
    fn check_winning_move(&self, column: usize) -> bool {
        let player = self.to_move;
        // check vertical alignment below the landing cell
        if self.heights[column] >= WIN_LENGTH - 1
            && (1..WIN_LENGTH).all(|offset| {
                self.cells[column + WIDTH * (self.heights[column] - offset)] == Some(player)
            })
        {
            return true;
        }

        // check horizontal and diagonal alignment through the landing cell
        for dy_dx in -1i32..=1 {
            let mut run = 0;
            for dx in [-1i32, 1].iter() {
                let mut x = column as i32 + dx;
                let mut y = self.heights[column] as i32 + dx * dy_dx;
                while self.cell(x, y) == Some(player) {
                    x += dx;
                    y += dx * dy_dx;
                    run += 1;
                }
            }
            if run >= WIN_LENGTH - 1 {
                return true;
            }
        }

        false
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;
        for _ in 0..HEIGHT {
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;

        let (origin_x, origin_y) = crossterm::cursor::position()?;

        for (idx, cell) in self.cells.iter().enumerate() {
            let (pos_x, pos_y) = (
                origin_x + (idx % WIDTH) as u16,
                origin_y - (idx / WIDTH) as u16,
            );

            stdout
                .queue(MoveTo(pos_x, pos_y))?
                .queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match cell {
                            Some(Player::One) => Color::Red,
                            Some(Player::Two) => Color::Yellow,
                            None => Color::DarkBlue,
                        }),
                ))?;
        }
        stdout
            .queue(MoveTo(origin_x + WIDTH as u16, origin_y))?
            .queue(PrintStyledContent(style("\n")))?;
        stdout.flush()?;
        Ok(())
    }
}

impl Position for ArrayBoard {
    fn successors(&self) -> Vec<Self> {
        if self.status != BoardStatus::Playing {
            return Vec::new();
        }
        (1..=WIDTH)
            .filter(|&column| self.playable(column - 1))
            .map(|column| {
                let mut successor = self.clone();
                // playable and in range, checked above
                let _ = successor.play_checked(column);
                successor
            })
            .collect()
    }

    fn to_move(&self) -> Player {
        self.to_move
    }

    fn count_lines(&self, length: usize, player: Player) -> usize {
        if length == 0 {
            return 0;
        }
        let mut count = 0;
        for &(dx, dy) in DIRECTIONS.iter() {
            for y in 0..HEIGHT as i32 {
                for x in 0..WIDTH as i32 {
                    if self.cell(x, y) != Some(player) {
                        continue;
                    }
                    // only measure a run from its first cell
                    if self.cell(x - dx, y - dy) == Some(player) {
                        continue;
                    }
                    let mut run = 1;
                    while self.cell(x + run * dx, y + run * dy) == Some(player) {
                        run += 1;
                    }
                    if run as usize == length {
                        count += 1;
                    }
                }
            }
        }
        count
    }
}
