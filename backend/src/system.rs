use log::info;
use sdl2;
use sdl2::event::Event;
use sdl2::image::{InitFlag, Sdl2ImageContext};
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Texture, TextureCreator, WindowCanvas};
use sdl2::video::WindowContext;

pub enum MouseButtonId {
    // x, y
    Left(i32, i32),
    Right(i32, i32),
    Middle(i32, i32),
    Other(i32, i32),
}

impl MouseButtonId {
    pub fn position(&self) -> (i32, i32) {
        match *self {
            MouseButtonId::Left(x, y)
            | MouseButtonId::Right(x, y)
            | MouseButtonId::Middle(x, y)
            | MouseButtonId::Other(x, y) => (x, y),
        }
    }
}

pub enum IoEvents {
    KeyDown(Keycode),
    KeyUp(Keycode),
    // x, y, xrel, yrel
    MouseMotion(i32, i32, i32, i32),
    MouseButtonUp(MouseButtonId),
    MouseButtonDown(MouseButtonId),
    // dx, dy (usually -1 or 1 based on direction)
    MouseWheel(i32, i32),
}

pub struct System {
    pub w: usize,
    pub h: usize,
    pub sdl_context: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub canvas: WindowCanvas,
    pub events: Vec<IoEvents>,
    event_pump: sdl2::EventPump,
    _image: Sdl2ImageContext,
}

impl System {
    pub fn new(title: &str, w: usize, h: usize) -> Result<System, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let image = sdl2::image::init(InitFlag::PNG)?;

        let window = match video_subsystem
            .window(title, w as u32, h as u32)
            .position_centered()
            .build()
        {
            Ok(w) => w,
            Err(e) => return Err(format!("Error while building window: {e}")),
        };

        let canvas = match window.into_canvas().accelerated().build() {
            Ok(c) => c,
            Err(e) => return Err(format!("Error while building renderer: {e}")),
        };

        let event_pump = sdl_context.event_pump()?;

        info!("SDL system up: {w}x{h} window '{title}'");

        Ok(System {
            w,
            h,
            sdl_context,
            video_subsystem,
            canvas,
            events: Vec::new(),
            event_pump,
            _image: image,
        })
    }

    /// Drains pending input into `self.events`. Returns false when the
    /// window was closed or Escape pressed.
    pub fn process_io_events(&mut self) -> bool {
        self.events.clear();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return false,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => self.events.push(IoEvents::KeyDown(key)),
                Event::KeyUp {
                    keycode: Some(key), ..
                } => self.events.push(IoEvents::KeyUp(key)),
                Event::MouseMotion {
                    x, y, xrel, yrel, ..
                } => self.events.push(IoEvents::MouseMotion(x, y, xrel, yrel)),
                Event::MouseButtonDown { mouse_btn, x, y, .. } => self
                    .events
                    .push(IoEvents::MouseButtonDown(button_id(mouse_btn, x, y))),
                Event::MouseButtonUp { mouse_btn, x, y, .. } => self
                    .events
                    .push(IoEvents::MouseButtonUp(button_id(mouse_btn, x, y))),
                Event::MouseWheel { x, y, .. } => self.events.push(IoEvents::MouseWheel(x, y)),
                _ => {}
            }
        }
        true
    }

    pub fn texture_creator(&self) -> TextureCreator<WindowContext> {
        self.canvas.texture_creator()
    }

    pub fn clear_screen(&mut self, color: Color) {
        self.canvas.set_draw_color(color);
        self.canvas.clear();
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        self.canvas.set_draw_color(color);
        self.canvas.fill_rect(rect)
    }

    /// Copies a whole texture to `dst`, or over the whole screen when
    /// `dst` is None.
    pub fn blit(&mut self, texture: &Texture, dst: Option<Rect>) -> Result<(), String> {
        self.canvas.copy(texture, None, dst)
    }

    pub fn draw_to_screen(&mut self) {
        self.canvas.present();
        ::std::thread::sleep(::std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }
}

fn button_id(button: MouseButton, x: i32, y: i32) -> MouseButtonId {
    match button {
        MouseButton::Left => MouseButtonId::Left(x, y),
        MouseButton::Right => MouseButtonId::Right(x, y),
        MouseButton::Middle => MouseButtonId::Middle(x, y),
        _ => MouseButtonId::Other(x, y),
    }
}
