//! Eight-way quantized ball direction
//!
//! Each direction carries a stable numeric code (1..=8) and decomposes into
//! at most two axis components. Note the vertical convention: `Up` moves
//! toward negative y and `Down` toward positive y.

use rand::Rng;

/// A single axis component of a direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Up,
    Right,
    Down,
    Left,
}

impl Component {
    /// Evaluation order used by the motion engine
    pub const ORDER: [Component; 4] = [
        Component::Up,
        Component::Right,
        Component::Down,
        Component::Left,
    ];
}

/// Ball direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
    UpRight,
    UpLeft,
    DownRight,
    DownLeft,
}

impl Direction {
    /// All directions, indexed by `code() - 1`
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::UpRight,
        Direction::UpLeft,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    /// Numeric code: 1=up 2=right 3=down 4=left 5=up-right 6=up-left
    /// 7=down-right 8=down-left
    pub fn code(self) -> u8 {
        match self {
            Direction::Up => 1,
            Direction::Right => 2,
            Direction::Down => 3,
            Direction::Left => 4,
            Direction::UpRight => 5,
            Direction::UpLeft => 6,
            Direction::DownRight => 7,
            Direction::DownLeft => 8,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=8 => Some(Self::ALL[(code - 1) as usize]),
            _ => None,
        }
    }

    /// Axis components of this direction
    pub fn components(self) -> &'static [Component] {
        use Component::*;
        match self {
            Direction::Up => &[Up],
            Direction::Right => &[Right],
            Direction::Down => &[Down],
            Direction::Left => &[Left],
            Direction::UpRight => &[Up, Right],
            Direction::UpLeft => &[Up, Left],
            Direction::DownRight => &[Right, Down],
            Direction::DownLeft => &[Down, Left],
        }
    }

    #[inline]
    pub fn has(self, component: Component) -> bool {
        self.components().contains(&component)
    }

    /// Uniformly random direction
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}
