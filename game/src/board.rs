use crate::piece::Position;

pub const BOARD_SIZE: i32 = 8;
pub const TILE_SIZE: i32 = 75;
pub const SCREEN_WIDTH: u32 = 600;
pub const SCREEN_HEIGHT: u32 = 600;

/// Board cell under a window pixel.
pub fn cell_at(px: i32, py: i32) -> Position {
    Position::new(px / TILE_SIZE, py / TILE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::{cell_at, BOARD_SIZE, TILE_SIZE};
    use crate::piece::Position;

    #[test]
    fn pixels_map_to_cells_by_tile_division() {
        assert_eq!(cell_at(0, 0), Position::new(0, 0));
        assert_eq!(cell_at(74, 74), Position::new(0, 0));
        assert_eq!(cell_at(75, 0), Position::new(1, 0));
        assert_eq!(cell_at(0, 150), Position::new(0, 2));
        assert_eq!(cell_at(599, 599), Position::new(7, 7));
    }

    #[test]
    fn board_covers_the_whole_window() {
        assert_eq!(BOARD_SIZE * TILE_SIZE, 600);
    }
}
