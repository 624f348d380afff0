use backend::system::{IoEvents, System};
use backend::texture;
use log::{info, warn};
use sdl2::pixels::Color;

use game::board::{self, SCREEN_HEIGHT, SCREEN_WIDTH};
use game::render;
use game::state::{opening_lineup, ClickOutcome, GameState};

// Texture load order matches the sprite slots in the opening lineup.
const PIECE_SPRITES: [&str; 10] = [
    "black-king.png",
    "black-queen.png",
    "black-bishop.png",
    "black-rook.png",
    "black-knight.png",
    "white-king.png",
    "white-queen.png",
    "white-bishop.png",
    "white-rook.png",
    "white-knight.png",
];

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(msg) = run() {
        eprintln!("Game failure: {msg}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut system = System::new(
        "Tactics Game",
        SCREEN_WIDTH as usize,
        SCREEN_HEIGHT as usize,
    )?;
    let creator = system.texture_creator();
    let textures = texture::load_textures(&creator, &PIECE_SPRITES)?;

    let mut state = GameState::new(opening_lineup());
    info!("turn timeline: {:?}", state.turn_ranking());

    loop {
        if !system.process_io_events() {
            return Ok(());
        }

        let clicks: Vec<(i32, i32)> = system
            .events
            .iter()
            .filter_map(|event| match event {
                IoEvents::MouseButtonDown(button) => Some(button.position()),
                _ => None,
            })
            .collect();

        for (px, py) in clicks {
            let cell = board::cell_at(px, py);
            match state.handle_click(cell) {
                ClickOutcome::Selected(piece) => {
                    info!("piece {piece} selected at ({}, {})", cell.x, cell.y);
                }
                ClickOutcome::Moved { piece, to } => {
                    info!("piece {piece} moved to ({}, {})", to.x, to.y);
                    info!("next to act: piece {}", state.active_piece());
                }
                ClickOutcome::Rejected { piece, to } => {
                    warn!("invalid move: piece {piece} to ({}, {})", to.x, to.y);
                }
                ClickOutcome::Ignored => {}
            }
        }

        system.clear_screen(Color::RGB(0, 0, 0));
        render::draw_board(&mut system)?;
        render::draw_pieces(&mut system, &textures, &state.pieces)?;
        system.draw_to_screen();
    }
}
