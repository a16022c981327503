//! Game loop driving two agents over a shared canonical board

use serde::Serialize;

use battlechess_core::{rules, Agent, BoardState, Color, Move};

/// Outcome of a single game
#[derive(Clone, Debug, Serialize)]
pub struct GameOutcome {
    pub winner: Option<Color>,
    pub plies: u32,
    pub moves: Vec<Move>,
}

/// Play one game between two agents on a fresh canonical board.
///
/// The driver owns the board: each turn the mover's agent proposes a move
/// for its color, the move is committed, and the win condition polled.
/// A side left without any legal move forfeits.
pub fn play_game(white: &Agent, black: &Agent, max_plies: u32) -> GameOutcome {
    let mut board = BoardState::new();
    let mut moves = Vec::new();
    let mut mover = Color::White;

    while (moves.len() as u32) < max_plies {
        if let Some(winner) = rules::winner(&board) {
            return GameOutcome {
                winner: Some(winner),
                plies: moves.len() as u32,
                moves,
            };
        }

        let agent = if mover == Color::White { white } else { black };
        let mv = match agent.get_move(&board) {
            Ok(mv) => mv,
            Err(_) => {
                return GameOutcome {
                    winner: Some(mover.opponent()),
                    plies: moves.len() as u32,
                    moves,
                }
            }
        };

        debug_assert!(commit_is_legal(&mv, mover, &board));
        board.apply_move(mv);
        moves.push(mv);
        mover = mover.opponent();
    }

    GameOutcome {
        winner: rules::winner(&board),
        plies: moves.len() as u32,
        moves,
    }
}

fn commit_is_legal(mv: &Move, mover: Color, board: &BoardState) -> bool {
    match *mv {
        Move::Step { unit, from, to } | Move::Attack { attacker: unit, from, to, .. } => {
            unit.color == mover && rules::is_valid_move(unit, from, to, board)
        }
        Move::Recruit { unit, to } => rules::can_recruit(mover, unit, to, board),
    }
}
