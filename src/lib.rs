//! Text rendering for a small monochrome handheld puzzle game.
//!
//! The display is a 128x64 1-bpp panel. Text is drawn with a hand-built
//! 4x6 bitmap font stored as packed column bytes, blitted through two
//! sprite primitives: self-masked (paint) and erase. The game-side data
//! holders (blocks, player cursor, pop-up messages) live alongside the
//! renderer because they are what feeds it strings every frame.

#![cfg_attr(not(test), no_std)]

pub mod block;
pub mod display;
pub mod font;
pub mod message;
pub mod player;
pub mod settings;
pub mod sprites;
pub mod text;

pub use display::{Color, Display};
pub use text::TextRenderer;
