/// One board cell. Movement rules work on plain integer offsets and do not
/// clamp to the board edge.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }
}

/// Combat stats. Only `speed` drives any logic (turn ordering); attack and
/// defense are carried on the piece for the eventual combat rules.
#[derive(Debug, Copy, Clone)]
pub struct Stats {
    pub speed: i32,
    pub attack: i32,
    pub defense: i32,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PieceKind {
    King,
    Queen,
    Bishop,
    Rook,
    Knight,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

#[derive(Debug, Clone)]
pub struct Piece {
    pub pos: Position,
    pub stats: Stats,
    pub kind: PieceKind,
    pub player: Player,
    /// Slot in the texture table loaded at startup.
    pub sprite: usize,
}
