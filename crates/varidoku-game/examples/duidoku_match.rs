//! Example demonstrating a seeded duidoku self-play match.
//!
//! Two computer players alternate random legal moves until neither can
//! place a number; the player left without a move loses.
//!
//! # Usage
//!
//! ```sh
//! cargo run -p varidoku-game --example duidoku_match
//! ```
//!
//! Replay a specific match on a bigger board:
//!
//! ```sh
//! cargo run -p varidoku-game --example duidoku_match -- --side 9 --seed 7
//! ```
//!
//! Display the board with letters (wordoku), optionally Greek:
//!
//! ```sh
//! cargo run -p varidoku-game --example duidoku_match -- --lettered --greek
//! ```

use std::process;

use clap::Parser;
use rand::SeedableRng as _;
use rand_pcg::Pcg64Mcg;
use varidoku_core::{Alphabet, number_to_symbol};
use varidoku_game::{Board, DuidokuBoard, PcMove};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board side length.
    #[arg(long, value_name = "SIDE", default_value_t = DuidokuBoard::DEFAULT_SIDE)]
    side: usize,

    /// Seed for the move generator.
    #[arg(long, value_name = "SEED", default_value_t = 0)]
    seed: u64,

    /// Display placed numbers as letters.
    #[arg(long)]
    lettered: bool,

    /// Use the Greek alphabet in lettered mode.
    #[arg(long)]
    greek: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut board = match DuidokuBoard::with_side(args.side, args.lettered) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };
    let alphabet = if args.greek {
        Alphabet::Greek
    } else {
        Alphabet::Latin
    };
    let mut rng = Pcg64Mcg::seed_from_u64(args.seed);

    let mut mover = 1;
    let mut moves = 0;
    while let Some(PcMove { x, y, number }) = board.pc_move(&mut rng) {
        let text = cell_text(number, args.side, alphabet, args.lettered);
        println!("player {mover} places {text} at ({x}, {y})");
        mover = 3 - mover;
        moves += 1;
    }

    println!();
    print_board(&board, alphabet, args.lettered);
    println!();
    println!("finished after {moves} moves; player {} wins", 3 - mover);
}

fn print_board(board: &DuidokuBoard, alphabet: Alphabet, lettered: bool) {
    let grid = board.grid();
    for x in 0..grid.side() {
        let row: Vec<String> = grid
            .row(x)
            .iter()
            .map(|&value| {
                if value == 0 {
                    ".".to_owned()
                } else {
                    cell_text(value, grid.side(), alphabet, lettered)
                }
            })
            .collect();
        println!("{}", row.join(" "));
    }
}

fn cell_text(number: u8, side: usize, alphabet: Alphabet, lettered: bool) -> String {
    if lettered {
        number_to_symbol(i32::from(number), side, alphabet).to_string()
    } else {
        number.to_string()
    }
}
