//! Scholar's Mate demo
//!
//! Plays the four-move Scholar's Mate line (1. e4 e5 2. Bc4 Nc6 3. Qh5 Nf6
//! 4. Qxf7) through the full validation pipeline and prints the board after
//! every ply. The final ply is a capture, so the capture summary and the
//! material balance show up too.
//!
//! Run with `RUST_LOG=debug` to watch the move log.

use chess_logic::api::{do_move, material_advantage, new_game};
use chess_logic::Move;
use tracing::info;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut board = new_game();
    println!("Starting position:\n{board}\n");

    let line = [
        ("e4", Move::new((6, 4), (4, 4))),
        ("e5", Move::new((1, 4), (3, 4))),
        ("Bc4", Move::new((7, 5), (4, 2))),
        ("Nc6", Move::new((0, 1), (2, 2))),
        ("Qh5", Move::new((7, 3), (3, 7))),
        ("Nf6", Move::new((0, 6), (2, 5))),
        ("Qxf7", Move::new((3, 7), (1, 5))),
    ];

    for (name, mv) in line {
        match do_move(&mut board, mv) {
            Ok(()) => info!("{name}: {mv}"),
            Err(err) => {
                eprintln!("{name} was rejected: {err}");
                return;
            }
        }
        println!("After {name}:\n{board}\n");
    }

    println!("{}", board.capture_summary());
    println!("Material advantage: {:+}", material_advantage(&board));
}
