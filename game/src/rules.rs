//! Per-kind movement predicates. Legality is purely geometric: no occupancy
//! checks, no captures, and a zero offset is legal wherever the geometry
//! allows it.

use crate::piece::{PieceKind, Position};

pub type MoveRule = fn(Position, Position) -> bool;

impl PieceKind {
    /// The movement predicate for this kind of piece.
    pub fn rule(self) -> MoveRule {
        match self {
            PieceKind::King => king_move,
            PieceKind::Queen => queen_move,
            PieceKind::Bishop => bishop_move,
            PieceKind::Rook => rook_move,
            PieceKind::Knight => knight_move,
        }
    }
}

pub fn move_allowed(kind: PieceKind, from: Position, to: Position) -> bool {
    kind.rule()(from, to)
}

// One tile in any direction.
fn king_move(from: Position, to: Position) -> bool {
    (to.x - from.x).abs() <= 1 && (to.y - from.y).abs() <= 1
}

// Any straight line: row, column or diagonal.
fn queen_move(from: Position, to: Position) -> bool {
    to.x == from.x || to.y == from.y || (to.x - from.x).abs() == (to.y - from.y).abs()
}

fn bishop_move(from: Position, to: Position) -> bool {
    (to.x - from.x).abs() == (to.y - from.y).abs()
}

fn rook_move(from: Position, to: Position) -> bool {
    to.x == from.x || to.y == from.y
}

// L-shaped: two tiles one way, one tile the other.
fn knight_move(from: Position, to: Position) -> bool {
    let dx = (to.x - from.x).abs();
    let dy = (to.y - from.y).abs();
    (dx == 2 && dy == 1) || (dx == 1 && dy == 2)
}
