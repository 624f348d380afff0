use backend::system::System;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Texture;

use crate::board::{BOARD_SIZE, TILE_SIZE};
use crate::piece::Piece;

const LIGHT_TILE: Color = Color::RGB(255, 255, 255);
const DARK_TILE: Color = Color::RGB(100, 100, 100);

// Sprites sit centered-ish inside their tile.
const SPRITE_INSET: i32 = 20;
const SPRITE_SIZE: u32 = 40;

pub fn draw_board(system: &mut System) -> Result<(), String> {
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let tile = Rect::new(
                col * TILE_SIZE,
                row * TILE_SIZE,
                TILE_SIZE as u32,
                TILE_SIZE as u32,
            );
            let color = if (row + col) % 2 == 0 {
                LIGHT_TILE
            } else {
                DARK_TILE
            };
            system.fill_rect(tile, color)?;
        }
    }
    Ok(())
}

pub fn draw_pieces(
    system: &mut System,
    textures: &[Texture],
    pieces: &[Piece],
) -> Result<(), String> {
    for piece in pieces {
        let dst = Rect::new(
            piece.pos.x * TILE_SIZE + SPRITE_INSET,
            piece.pos.y * TILE_SIZE + SPRITE_INSET,
            SPRITE_SIZE,
            SPRITE_SIZE,
        );
        system.blit(&textures[piece.sprite], Some(dst))?;
    }
    Ok(())
}
