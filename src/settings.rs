/// Game-wide constants and scene states.

pub const FPS: u8 = 30;

/// Message lifetime in frames: one second on screen, then a short
/// fade-out tail.
pub const MESSAGE_ANIM_FRAMES: u8 = FPS * 2 + 10;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Scene {
    Title,
    Play,
    Pause,
    GameOver,
    Help,
    Help2,
}
