/// Player cursor on the block grid.
///
/// Pausing parks the cursor off-grid at (-1,-1) and remembers where it
/// was, so unpausing puts it back.

pub struct Player {
    pub x: i8,
    pub y: i8,
    pub old_x: i8,
    pub old_y: i8,
    pub is_focus_pause: bool,
}

impl Player {
    pub fn new() -> Self {
        Self {
            x: 0,
            y: 0,
            old_x: 0,
            old_y: 0,
            is_focus_pause: false,
        }
    }

    pub fn init(&mut self) {
        self.x = 0;
        self.y = 0;
        self.is_focus_pause = false;
    }

    pub fn set(&mut self, x: i8, y: i8) {
        self.old_x = self.x;
        self.old_y = self.y;
        self.x = x;
        self.y = y;
    }

    pub fn focus_pause(&mut self) {
        self.is_focus_pause = true;
        self.set(-1, -1);
    }

    pub fn defocus_pause(&mut self) {
        self.is_focus_pause = false;
        let (x, y) = (self.old_x, self.old_y);
        self.set(x, y);
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
