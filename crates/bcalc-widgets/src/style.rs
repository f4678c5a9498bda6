#![forbid(unsafe_code)]

//! Colors and text styles.

/// A terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// The terminal's default foreground/background.
    Reset,
    Rgb(u8, u8, u8),
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(r, g, b)
    }
}

bitflags::bitflags! {
    /// Text attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        const BOLD      = 0b0000_0001;
        const DIM       = 0b0000_0010;
        const ITALIC    = 0b0000_0100;
        const UNDERLINE = 0b0000_1000;
        const REVERSE   = 0b0001_0000;
    }
}

/// A partial style: unset fields leave the cell underneath alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub attrs: Option<StyleFlags>,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add attribute flags on top of any already set.
    pub const fn add(mut self, flags: StyleFlags) -> Self {
        self.attrs = Some(match self.attrs {
            Some(existing) => existing.union(flags),
            None => flags,
        });
        self
    }

    pub const fn bold(self) -> Self {
        self.add(StyleFlags::BOLD)
    }

    pub const fn dim(self) -> Self {
        self.add(StyleFlags::DIM)
    }

    pub const fn reverse(self) -> Self {
        self.add(StyleFlags::REVERSE)
    }

    /// `other` wins wherever it sets a field.
    pub fn patch(self, other: Style) -> Style {
        Style {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attrs: match (self.attrs, other.attrs) {
                (Some(a), Some(b)) => Some(a | b),
                (a, b) => b.or(a),
            },
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_none()
    }
}
