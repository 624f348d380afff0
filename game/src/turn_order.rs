use crate::piece::Piece;

/// Round-robin timeline over piece indices, fastest piece first.
pub struct TurnOrder {
    order: Vec<usize>,
    index: usize,
}

impl TurnOrder {
    /// Ranks pieces by descending speed. Equal speeds keep roster order.
    pub fn new(pieces: &[Piece]) -> TurnOrder {
        let mut order: Vec<usize> = (0..pieces.len()).collect();
        order.sort_by(|a, b| pieces[*b].stats.speed.cmp(&pieces[*a].stats.speed));
        TurnOrder { order, index: 0 }
    }

    pub fn ranking(&self) -> &[usize] {
        &self.order
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the piece index whose turn it is and advances the cursor,
    /// wrapping around past the slowest piece.
    pub fn next(&mut self) -> usize {
        let piece = self.order[self.index];
        self.index = (self.index + 1) % self.order.len();
        piece
    }
}

#[cfg(test)]
mod tests {
    use super::TurnOrder;
    use crate::piece::{Piece, PieceKind, Player, Position, Stats};

    fn piece_with_speed(speed: i32) -> Piece {
        Piece {
            pos: Position::new(0, 0),
            stats: Stats {
                speed,
                attack: 0,
                defense: 0,
            },
            kind: PieceKind::King,
            player: Player::One,
            sprite: 0,
        }
    }

    #[test]
    fn ranks_pieces_by_descending_speed() {
        let pieces = vec![
            piece_with_speed(2),
            piece_with_speed(9),
            piece_with_speed(5),
        ];
        let order = TurnOrder::new(&pieces);
        assert_eq!(order.ranking(), &[1, 2, 0]);
    }

    #[test]
    fn equal_speeds_keep_roster_order() {
        let pieces = vec![
            piece_with_speed(3),
            piece_with_speed(7),
            piece_with_speed(3),
        ];
        let order = TurnOrder::new(&pieces);
        assert_eq!(order.ranking(), &[1, 0, 2]);
    }

    #[test]
    fn next_cycles_through_every_piece_and_wraps() {
        let pieces = vec![
            piece_with_speed(1),
            piece_with_speed(3),
            piece_with_speed(2),
        ];
        let mut order = TurnOrder::new(&pieces);
        assert_eq!(order.next(), 1);
        assert_eq!(order.next(), 2);
        assert_eq!(order.next(), 0);
        assert_eq!(order.next(), 1);
    }

    #[test]
    fn empty_roster_gives_empty_ranking() {
        let order = TurnOrder::new(&[]);
        assert!(order.is_empty());
        assert!(order.ranking().is_empty());
    }
}
