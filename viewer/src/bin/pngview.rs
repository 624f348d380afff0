//! Static PNG viewer: shows test-img.png stretched over the window, Space
//! toggles the background color, Escape or closing the window exits.

use backend::system::{IoEvents, System};
use backend::texture;
use log::info;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;

const BG_BLUE: Color = Color::RGB(0, 0, 255);
const BG_GREEN: Color = Color::RGB(0, 255, 0);

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(msg) = run() {
        eprintln!("pngview failure: {msg}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut system = System::new("PNG Renderer", 800, 600)?;
    let creator = system.texture_creator();
    let image = texture::load_texture(&creator, "test-img.png")?;

    let mut toggled = false;
    loop {
        if !system.process_io_events() {
            return Ok(());
        }

        for event in &system.events {
            if let IoEvents::KeyDown(Keycode::Space) = event {
                toggled = !toggled;
                info!(
                    "background toggled to {}",
                    if toggled { "green" } else { "blue" }
                );
            }
        }

        system.clear_screen(if toggled { BG_GREEN } else { BG_BLUE });
        system.blit(&image, None)?;
        system.draw_to_screen();
    }
}
