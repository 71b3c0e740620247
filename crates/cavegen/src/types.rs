use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Floor,
}

impl Cell {
    pub fn is_wall(self) -> bool {
        self == Self::Wall
    }

    pub fn is_floor(self) -> bool {
        self == Self::Floor
    }
}
