/// A single puzzle block on the grid.

/// The four block shapes, named for their silhouette.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BlockKind {
    DownSlope,
    UpSlope,
    Valley,
    Peak,
}

pub struct Block {
    pub kind: BlockKind,
    pub is_live: bool,
    pub is_chained: bool,
    pub is_removing: bool,
}

impl Block {
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            is_live: false,
            is_chained: false,
            is_removing: false,
        }
    }

    pub fn init(&mut self) {
        self.is_live = false;
        self.is_chained = false;
        self.is_removing = false;
    }
}
