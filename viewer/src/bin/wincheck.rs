//! Window smoke test: opens a window, keeps it up for three seconds, exits.

use backend::system::System;
use log::info;
use sdl2::pixels::Color;
use std::thread;
use std::time::Duration;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut system = match System::new("SDL Window", 800, 600) {
        Ok(s) => s,
        Err(msg) => {
            eprintln!("wincheck failure: {msg}");
            std::process::exit(1);
        }
    };

    system.clear_screen(Color::RGB(0, 0, 0));
    system.draw_to_screen();

    info!("window up, closing in 3 seconds");
    thread::sleep(Duration::from_secs(3));
}
