/// Pop-up messages shown during play: chain hits, bonuses, level-ups.
///
/// A message holds the gameplay numbers the render pass turns into a
/// string; `tick` runs the per-frame countdown that drives its fade.

use crate::settings::MESSAGE_ANIM_FRAMES;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MessageKind {
    Hit,
    HitAdd,
    HitSpecial,
    LevelUp,
    AllClear,
}

pub struct Message {
    pub kind: MessageKind,
    pub anim: u8,
    pub is_live: bool,
    pub index: u8,
    pub block_num: u8,
    pub score: i16,
}

impl Message {
    pub fn new(kind: MessageKind, block_num: u8, score: i16) -> Self {
        Self {
            kind,
            anim: MESSAGE_ANIM_FRAMES,
            is_live: false,
            index: 0,
            block_num,
            score,
        }
    }

    /// Advance the countdown. Returns the frames that were left before
    /// this tick; once it reaches zero it stays there.
    pub fn tick(&mut self) -> u8 {
        if self.anim == 0 {
            return 0;
        }
        let left = self.anim;
        self.anim -= 1;
        left
    }
}
