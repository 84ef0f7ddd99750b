/// Monochrome display driver.
///
/// Owns the 128x64 1-bpp framebuffer in SSD1306 page layout: one byte
/// covers 8 vertically stacked pixels, bit 0 being the topmost row of
/// the page. The whole buffer fits in 1 KiB and is flushed to the panel
/// by the platform layer once per frame.

use spin::Mutex;

pub const WIDTH: usize = 128;
pub const HEIGHT: usize = 64;

const BUFFER_SIZE: usize = WIDTH * HEIGHT / 8;

/// Pixel state on a 1-bit panel. `White` is a lit pixel.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Color {
    Black,
    White,
}

pub struct Display {
    buffer: [u8; BUFFER_SIZE],
}

pub static DISPLAY: Mutex<Display> = Mutex::new(Display::new());

impl Display {
    pub const fn new() -> Self {
        Self {
            buffer: [0; BUFFER_SIZE],
        }
    }

    pub fn width(&self) -> usize {
        WIDTH
    }

    pub fn height(&self) -> usize {
        HEIGHT
    }

    /// Raw page-layout buffer, in the order the panel expects it.
    pub fn buffer(&self) -> &[u8; BUFFER_SIZE] {
        &self.buffer
    }

    #[inline]
    pub fn put_pixel(&mut self, x: i16, y: i16, color: Color) {
        if x < 0 || y < 0 || x >= WIDTH as i16 || y >= HEIGHT as i16 {
            return;
        }
        let offset = (y as usize / 8) * WIDTH + x as usize;
        let bit = 1 << (y as usize % 8);
        match color {
            Color::White => self.buffer[offset] |= bit,
            Color::Black => self.buffer[offset] &= !bit,
        }
    }

    pub fn get_pixel(&self, x: i16, y: i16) -> Color {
        if x < 0 || y < 0 || x >= WIDTH as i16 || y >= HEIGHT as i16 {
            return Color::Black;
        }
        let offset = (y as usize / 8) * WIDTH + x as usize;
        if self.buffer[offset] >> (y as usize % 8) & 1 != 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    pub fn clear(&mut self) {
        self.buffer = [0; BUFFER_SIZE];
    }

    pub fn fill_rect(&mut self, x: i16, y: i16, w: i16, h: i16, color: Color) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_pixel(x + dx, y + dy, color);
            }
        }
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}
