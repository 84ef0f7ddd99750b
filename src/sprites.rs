/// Sprite blitting over packed-column frames.
///
/// Frame format: `frames[0]` = width in columns, `frames[1]` = height
/// in rows (at most 8), then `width` bytes per frame — one byte per
/// column, bit 0 = top row. The glyph table uses the same format.

use crate::display::{Color, Display};

/// Paint mode: lit frame pixels go white, unlit positions are left
/// untouched (the frame masks itself).
pub fn draw_self_masked(fb: &mut Display, x: i16, y: i16, frames: &[u8], index: u8) {
    blit(fb, x, y, frames, index, Color::White);
}

/// Erase mode: writes black at the frame's lit positions only, so
/// previously painted output disappears without clearing a rectangle.
pub fn draw_erase(fb: &mut Display, x: i16, y: i16, frames: &[u8], index: u8) {
    blit(fb, x, y, frames, index, Color::Black);
}

fn blit(fb: &mut Display, x: i16, y: i16, frames: &[u8], index: u8, color: Color) {
    let width = frames[0] as usize;
    let height = frames[1] as usize;
    let frame = 2 + index as usize * width;

    for col in 0..width {
        let bits = frames[frame + col];
        for row in 0..height {
            if bits >> row & 1 != 0 {
                fb.put_pixel(x + col as i16, y + row as i16, color);
            }
        }
    }
}
