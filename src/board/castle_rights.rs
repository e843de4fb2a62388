use super::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

/// The four independent castling flags, packed into one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CastleRights(u8);

impl CastleRights {
    pub const fn white_kingside() -> Self {
        Self(0b1000)
    }

    pub const fn black_kingside() -> Self {
        Self(0b0100)
    }

    pub const fn white_queenside() -> Self {
        Self(0b0010)
    }

    pub const fn black_queenside() -> Self {
        Self(0b0001)
    }

    pub const fn all() -> Self {
        Self(
            Self::white_kingside().0
                | Self::black_kingside().0
                | Self::white_queenside().0
                | Self::black_queenside().0,
        )
    }

    pub const fn none() -> Self {
        Self(0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: CastleRights) -> bool {
        (self.0 & other.0) == other.0
    }

    pub const fn without(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 & !other.0)
    }

    pub fn for_side(color: Color, side: CastleSide) -> Self {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => Self::white_kingside(),
            (Color::White, CastleSide::Queenside) => Self::white_queenside(),
            (Color::Black, CastleSide::Kingside) => Self::black_kingside(),
            (Color::Black, CastleSide::Queenside) => Self::black_queenside(),
        }
    }

    pub fn for_color(color: Color) -> Self {
        Self::for_side(color, CastleSide::Kingside) | Self::for_side(color, CastleSide::Queenside)
    }

    pub fn to_fen(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }

        [
            (Self::white_kingside(), 'K'),
            (Self::white_queenside(), 'Q'),
            (Self::black_kingside(), 'k'),
            (Self::black_queenside(), 'q'),
        ]
        .iter()
        .filter(|(rights, _)| self.contains(*rights))
        .map(|(_, c)| *c)
        .collect()
    }
}

impl Default for CastleRights {
    fn default() -> Self {
        Self::none()
    }
}

impl std::ops::BitOr for CastleRights {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for CastleRights {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
