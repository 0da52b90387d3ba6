/// The fixed set of candidate button colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
    Pink,
    SkyBlue,
    DarkGray,
    DarkPurple,
    Brown,
    Beige,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 12] = [
        PaletteColor::Red,
        PaletteColor::Blue,
        PaletteColor::Green,
        PaletteColor::Yellow,
        PaletteColor::Purple,
        PaletteColor::Orange,
        PaletteColor::Pink,
        PaletteColor::SkyBlue,
        PaletteColor::DarkGray,
        PaletteColor::DarkPurple,
        PaletteColor::Brown,
        PaletteColor::Beige,
    ];

    pub fn rgb(self) -> u32 {
        match self {
            PaletteColor::Red => 0xe62937,
            PaletteColor::Blue => 0x0079f1,
            PaletteColor::Green => 0x00e430,
            PaletteColor::Yellow => 0xfdf900,
            PaletteColor::Purple => 0xc87aff,
            PaletteColor::Orange => 0xffa100,
            PaletteColor::Pink => 0xff6dc2,
            PaletteColor::SkyBlue => 0x66bfff,
            PaletteColor::DarkGray => 0x505050,
            PaletteColor::DarkPurple => 0x701f7e,
            PaletteColor::Brown => 0x7f6a4f,
            PaletteColor::Beige => 0xd3b083,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_has_twelve_distinct_colors() {
        let mut values: Vec<u32> = PaletteColor::ALL.iter().map(|c| c.rgb()).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), 12);
    }
}
