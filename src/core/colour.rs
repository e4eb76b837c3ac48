use serde::{Deserialize, Serialize};
use std::fmt;

/// 盤面の色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Colour {
    PacificPoint,
    RealRed,
    OldOlive,
    DaffodilDelight,
}

/// Every colour a block or a goal can take.
pub const PALETTE: [Colour; 4] = [
    Colour::PacificPoint,
    Colour::RealRed,
    Colour::OldOlive,
    Colour::DaffodilDelight,
];

impl Colour {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Colour::PacificPoint => (1, 128, 181),
            Colour::RealRed => (199, 44, 58),
            Colour::OldOlive => (138, 151, 71),
            Colour::DaffodilDelight => (255, 211, 92),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Colour::PacificPoint => "Pacific Point",
            Colour::RealRed => "Real Red",
            Colour::OldOlive => "Old Olive",
            Colour::DaffodilDelight => "Daffodil Delight",
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
