#![forbid(unsafe_code)]

//! Border glyphs and edge selection.

/// Glyphs for one border style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub vertical: char,
    pub horizontal: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
}

impl BorderSet {
    pub const PLAIN: Self = Self {
        vertical: '│',
        horizontal: '─',
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
    };

    pub const ROUNDED: Self = Self {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        ..Self::PLAIN
    };

    pub const DOUBLE: Self = Self {
        vertical: '║',
        horizontal: '═',
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
    };
}

/// Border style presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderType {
    #[default]
    Plain,
    Rounded,
    Double,
}

impl BorderType {
    pub const fn border_set(self) -> BorderSet {
        match self {
            BorderType::Plain => BorderSet::PLAIN,
            BorderType::Rounded => BorderSet::ROUNDED,
            BorderType::Double => BorderSet::DOUBLE,
        }
    }
}

bitflags::bitflags! {
    /// Which edges to draw.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Borders: u8 {
        const NONE   = 0b0000;
        const TOP    = 0b0001;
        const RIGHT  = 0b0010;
        const BOTTOM = 0b0100;
        const LEFT   = 0b1000;
        const ALL    = Self::TOP.bits() | Self::RIGHT.bits() | Self::BOTTOM.bits() | Self::LEFT.bits();
    }
}
