/// Text renderer.
///
/// Maintains a cursor position, base X margin, line height, and draw
/// color, and routes print!/println! output onto the global display.
/// One renderer instance owns one cursor; independent text regions
/// need their own instance.

use core::fmt;
use spin::Mutex;

use crate::display::{Color, Display, DISPLAY};
use crate::font::{self, GLYPH_WIDTH, LINE_HEIGHT};
use crate::sprites;

pub struct TextRenderer {
    cursor_x: i16,
    cursor_y: i16,
    base_x: i16,
    line_height: u8,
    letter_spacing: u8,
    color: Color,
}

pub static TEXT: Mutex<TextRenderer> = Mutex::new(TextRenderer::new(LINE_HEIGHT));

impl TextRenderer {
    pub const fn new(line_height: u8) -> Self {
        Self {
            cursor_x: 0,
            cursor_y: 0,
            base_x: 0,
            line_height,
            letter_spacing: 1,
            color: Color::White,
        }
    }

    /// Move the cursor. `x` also becomes the left margin a line feed
    /// returns to.
    pub fn set_cursor(&mut self, x: i16, y: i16) {
        self.cursor_x = x;
        self.base_x = x;
        self.cursor_y = y;
    }

    /// `White` paints glyphs; `Black` erases previously painted ones.
    pub fn set_text_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_line_height(&mut self, line_height: u8) {
        self.line_height = line_height;
    }

    pub fn cursor(&self) -> (i16, i16) {
        (self.cursor_x, self.cursor_y)
    }

    /// Write one byte. A line feed resets X to the base margin and
    /// advances Y by the line height; every other byte advances X by
    /// the glyph width plus letter spacing, whether or not the font had
    /// a glyph to draw for it.
    pub fn write_byte(&mut self, fb: &mut Display, byte: u8) {
        if byte == b'\n' {
            self.cursor_x = self.base_x;
            self.cursor_y += self.line_height as i16;
        } else {
            self.draw_glyph(fb, byte);
            self.cursor_x += (GLYPH_WIDTH + self.letter_spacing) as i16;
        }
    }

    pub fn print(&mut self, fb: &mut Display, text: &str) {
        for byte in text.bytes() {
            self.write_byte(fb, byte);
        }
    }

    fn draw_glyph(&self, fb: &mut Display, byte: u8) {
        let Some(index) = font::glyph_index(byte) else {
            return;
        };

        // The glyph raster sits one row below the cursor line.
        let (x, y) = (self.cursor_x, self.cursor_y + 1);

        match self.color {
            Color::White => sprites::draw_self_masked(fb, x, y, &font::FONT_IMAGES, index),
            Color::Black => sprites::draw_erase(fb, x, y, &font::FONT_IMAGES, index),
        }
    }
}

/// Handle for formatted output through the global renderer and display.
pub struct Screen;

impl fmt::Write for Screen {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut fb = DISPLAY.lock();
        TEXT.lock().print(&mut fb, s);
        Ok(())
    }
}

#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => ($crate::text::_print(::core::format_args!($($arg)*)));
}

#[macro_export]
macro_rules! println {
    () => ($crate::print!("\n"));
    ($($arg:tt)*) => ($crate::print!("{}\n", ::core::format_args!($($arg)*)));
}

#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    use core::fmt::Write;

    let _ = Screen.write_fmt(args);
}
