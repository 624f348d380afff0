use crate::piece::{Piece, PieceKind, Player, Position, Stats};
use crate::rules::move_allowed;
use crate::turn_order::TurnOrder;

/// What a mouse click on the board resolved to.
#[derive(Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Selected(usize),
    Moved { piece: usize, to: Position },
    Rejected { piece: usize, to: Position },
    Ignored,
}

/// The whole game in one owned struct: roster, current selection and the
/// speed-ranked turn timeline.
pub struct GameState {
    pub pieces: Vec<Piece>,
    pub selected: Option<usize>,
    turns: TurnOrder,
    active: usize,
}

impl GameState {
    /// Builds the state and ranks the turn timeline. The roster must not
    /// be empty.
    pub fn new(pieces: Vec<Piece>) -> GameState {
        let mut turns = TurnOrder::new(&pieces);
        let active = turns.next();
        GameState {
            pieces,
            selected: None,
            turns,
            active,
        }
    }

    /// Piece occupying a cell, if any. First roster hit wins; nothing
    /// enforces occupancy uniqueness.
    pub fn piece_at(&self, cell: Position) -> Option<usize> {
        self.pieces.iter().position(|p| p.pos == cell)
    }

    /// Piece whose turn it is to act.
    pub fn active_piece(&self) -> usize {
        self.active
    }

    pub fn turn_ranking(&self) -> &[usize] {
        self.turns.ranking()
    }

    /// Click semantics: an occupied cell always (re)selects its piece; an
    /// empty cell resolves a pending move attempt and clears the selection
    /// whether or not the move was legal.
    pub fn handle_click(&mut self, cell: Position) -> ClickOutcome {
        if let Some(idx) = self.piece_at(cell) {
            self.selected = Some(idx);
            return ClickOutcome::Selected(idx);
        }

        match self.selected.take() {
            Some(idx) => {
                let piece = &self.pieces[idx];
                if move_allowed(piece.kind, piece.pos, cell) {
                    self.pieces[idx].pos = cell;
                    self.active = self.turns.next();
                    ClickOutcome::Moved { piece: idx, to: cell }
                } else {
                    ClickOutcome::Rejected { piece: idx, to: cell }
                }
            }
            None => ClickOutcome::Ignored,
        }
    }
}

/// The fixed ten-piece roster: one back rank per player, sprite slots in
/// texture load order (black set first, then white).
pub fn opening_lineup() -> Vec<Piece> {
    let lineup = [
        (0, 0, 5, 10, 5, PieceKind::King, Player::One),
        (1, 0, 3, 8, 6, PieceKind::Queen, Player::One),
        (2, 0, 4, 7, 7, PieceKind::Bishop, Player::One),
        (3, 0, 6, 9, 4, PieceKind::Rook, Player::One),
        (4, 0, 3, 8, 6, PieceKind::Knight, Player::One),
        (0, 7, 4, 7, 7, PieceKind::King, Player::Two),
        (1, 7, 5, 10, 5, PieceKind::Queen, Player::Two),
        (2, 7, 3, 8, 6, PieceKind::Bishop, Player::Two),
        (3, 7, 4, 7, 7, PieceKind::Rook, Player::Two),
        (4, 7, 6, 9, 4, PieceKind::Knight, Player::Two),
    ];

    lineup
        .iter()
        .enumerate()
        .map(|(sprite, &(x, y, speed, attack, defense, kind, player))| Piece {
            pos: Position::new(x, y),
            stats: Stats {
                speed,
                attack,
                defense,
            },
            kind,
            player,
            sprite,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{opening_lineup, ClickOutcome, GameState};
    use crate::piece::Position;

    #[test]
    fn clicking_an_occupied_cell_selects_the_piece() {
        let mut state = GameState::new(opening_lineup());
        let outcome = state.handle_click(Position::new(0, 0));
        assert_eq!(outcome, ClickOutcome::Selected(0));
        assert_eq!(state.selected, Some(0));
    }

    #[test]
    fn reselecting_overrides_the_previous_selection() {
        let mut state = GameState::new(opening_lineup());
        state.handle_click(Position::new(0, 0));
        let outcome = state.handle_click(Position::new(1, 0));
        assert_eq!(outcome, ClickOutcome::Selected(1));
        assert_eq!(state.selected, Some(1));
    }

    #[test]
    fn clicking_an_empty_cell_without_selection_does_nothing() {
        let mut state = GameState::new(opening_lineup());
        let outcome = state.handle_click(Position::new(4, 4));
        assert_eq!(outcome, ClickOutcome::Ignored);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn legal_move_updates_position_and_clears_selection() {
        let mut state = GameState::new(opening_lineup());
        state.handle_click(Position::new(0, 0)); // player one king
        let outcome = state.handle_click(Position::new(1, 1));
        assert_eq!(
            outcome,
            ClickOutcome::Moved {
                piece: 0,
                to: Position::new(1, 1)
            }
        );
        assert_eq!(state.pieces[0].pos, Position::new(1, 1));
        assert_eq!(state.selected, None);
    }

    #[test]
    fn illegal_move_leaves_position_unchanged() {
        let mut state = GameState::new(opening_lineup());
        state.handle_click(Position::new(0, 0)); // player one king
        let outcome = state.handle_click(Position::new(5, 5));
        assert_eq!(
            outcome,
            ClickOutcome::Rejected {
                piece: 0,
                to: Position::new(5, 5)
            }
        );
        assert_eq!(state.pieces[0].pos, Position::new(0, 0));
        assert_eq!(state.selected, None);
    }

    #[test]
    fn opening_lineup_turn_ranking_is_speed_sorted() {
        let state = GameState::new(opening_lineup());
        assert_eq!(state.turn_ranking(), &[3, 9, 0, 6, 2, 5, 8, 1, 4, 7]);
    }

    #[test]
    fn turn_cursor_advances_only_on_successful_moves() {
        let mut state = GameState::new(opening_lineup());
        assert_eq!(state.active_piece(), 3); // fastest: player one rook

        state.handle_click(Position::new(0, 0));
        state.handle_click(Position::new(5, 5)); // king cannot reach
        assert_eq!(state.active_piece(), 3);

        state.handle_click(Position::new(0, 0));
        state.handle_click(Position::new(1, 1));
        assert_eq!(state.active_piece(), 9);
    }
}
