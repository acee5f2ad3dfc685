//! Windowed backend on raylib: columns go into a CPU framebuffer that is
//! uploaded to a streaming texture once per frame.
use raylib::core::texture::RaylibTexture2D;
use raylib::prelude::*;

use crate::backend::{BackendError, InputBackend, RenderBackend};
use crate::config::Config;
use crate::core::input::{InputEvent, Key};
use crate::render::framebuffer::Framebuffer;
use crate::render::projector::{ColumnSlice, Rgba};

const KEYS: [(KeyboardKey, Key); 4] = [
    (KeyboardKey::KEY_UP, Key::Up),
    (KeyboardKey::KEY_DOWN, Key::Down),
    (KeyboardKey::KEY_LEFT, Key::Left),
    (KeyboardKey::KEY_RIGHT, Key::Right),
];

pub struct RaylibBackend {
    framebuffer: Framebuffer,
    // declared before `rl`: the texture must be unloaded while the window still exists
    texture: Texture2D,
    thread: RaylibThread,
    rl: RaylibHandle,
}

impl RaylibBackend {
    pub fn init(config: &Config) -> Result<Self, BackendError> {
        // build() panics when the window cannot be created; only the texture
        // setup below reports through BackendError::Init
        let (mut rl, thread) = raylib::init()
            .size(config.screen_width as i32, config.screen_height as i32)
            .title(&config.title)
            .vsync()
            .build();
        rl.set_target_fps(config.fps);

        let image = Image::gen_image_color(
            config.screen_width as i32,
            config.screen_height as i32,
            Color::BLACK,
        );
        let texture = rl
            .load_texture_from_image(&thread, &image)
            .map_err(|e| BackendError::Init(e.to_string()))?;

        tracing::info!(
            width = config.screen_width,
            height = config.screen_height,
            fps = config.fps,
            "window opened"
        );
        Ok(Self {
            framebuffer: Framebuffer::new(config.screen_width, config.screen_height),
            texture,
            thread,
            rl,
        })
    }
}

impl RenderBackend for RaylibBackend {
    fn size(&self) -> (u32, u32) {
        (self.framebuffer.width, self.framebuffer.height)
    }

    fn draw_background(&mut self, sky: Rgba, ground: Rgba) {
        self.framebuffer.paint_background(sky, ground);
    }

    fn draw_column(&mut self, column: u32, slice: ColumnSlice) {
        self.framebuffer.fill_column(column, slice.start, slice.end, slice.color);
    }

    fn present(&mut self) -> Result<(), BackendError> {
        let bytes = self.framebuffer.as_bytes();
        let expected = self.texture.width() as usize * self.texture.height() as usize * 4;
        if bytes.len() != expected {
            return Err(BackendError::Present(format!(
                "framebuffer has {} bytes, texture expects {expected}",
                bytes.len()
            )));
        }
        self.texture
            .update_texture(bytes)
            .map_err(|e| BackendError::Present(e.to_string()))?;

        let mut d = self.rl.begin_drawing(&self.thread);
        d.clear_background(Color::BLACK);
        d.draw_texture(&self.texture, 0, 0, Color::WHITE);
        Ok(())
    }
}

impl InputBackend for RaylibBackend {
    fn poll(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        // Escape and the close button both end up here
        if self.rl.window_should_close() {
            events.push(InputEvent::Quit);
        }
        for (rl_key, key) in KEYS {
            if self.rl.is_key_pressed(rl_key) {
                events.push(InputEvent::KeyDown(key));
            }
            if self.rl.is_key_released(rl_key) {
                events.push(InputEvent::KeyUp(key));
            }
        }
        events
    }
}

impl Drop for RaylibBackend {
    fn drop(&mut self) {
        tracing::debug!("closing window");
    }
}
