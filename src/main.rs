use anyhow::{Result, bail};
use tracing::info;

use gambit_core::Square;
use gambit_session::GameSession;

/// Fool's mate, in algebraic squares.
const DEMO_GAME: [(&str, &str); 4] = [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")];

fn square(name: &str) -> Result<Square> {
    match Square::from_algebraic(name) {
        Some(sq) => Ok(sq),
        None => bail!("not a square: {name}"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("gambit starting");

    let mut session = GameSession::new();
    for (from, to) in DEMO_GAME {
        session.apply_move(square(from)?, square(to)?)?;
    }

    let view = session.view();
    info!(
        status = %view.status,
        winner = ?view.winner,
        moves = view.history.len(),
        "game finished"
    );
    println!("{}", view.board.pretty());
    Ok(())
}
