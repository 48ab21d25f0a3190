/// Legacy 16-colour chat palette, only the entries the mod uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Palette {
    DarkRed,
    Gray,
    Green,
    Red,
    Yellow,
    White,
}

impl Palette {
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Palette::DarkRed => [0xAA, 0x00, 0x00],
            Palette::Gray => [0xAA, 0xAA, 0xAA],
            Palette::Green => [0x55, 0xFF, 0x55],
            Palette::Red => [0xFF, 0x55, 0x55],
            Palette::Yellow => [0xFF, 0xFF, 0x55],
            Palette::White => [0xFF, 0xFF, 0xFF],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    pub text: String,
    pub color: Palette,
}

/// A line of text made of coloured segments.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyledText {
    pub segments: Vec<Segment>,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, text: impl Into<String>, color: Palette) -> Self {
        self.push(text, color);
        self
    }

    pub fn push(&mut self, text: impl Into<String>, color: Palette) {
        self.segments.push(Segment {
            text: text.into(),
            color,
        });
    }

    /// Text with colours stripped.
    pub fn plain(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}
