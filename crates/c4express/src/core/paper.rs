//! Paper size registry
//!
//! Named paper sizes and their pixel dimensions. Lookup by name is exact and
//! case-sensitive; views fall back to [`PaperSize::A5Landscape`].

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum PaperSize {
    A6Portrait,
    A6Landscape,
    A5Portrait,
    #[default]
    A5Landscape,
    A4Portrait,
    A4Landscape,
    A3Portrait,
    A3Landscape,
    A2Portrait,
    A2Landscape,
    A1Portrait,
    A1Landscape,
    A0Portrait,
    A0Landscape,
    LetterPortrait,
    LetterLandscape,
    LegalPortrait,
    LegalLandscape,
    Slide4x3,
    Slide16x9,
}

impl PaperSize {
    /// Every registered size, in registry order
    pub const ALL: [PaperSize; 20] = [
        PaperSize::A6Portrait,
        PaperSize::A6Landscape,
        PaperSize::A5Portrait,
        PaperSize::A5Landscape,
        PaperSize::A4Portrait,
        PaperSize::A4Landscape,
        PaperSize::A3Portrait,
        PaperSize::A3Landscape,
        PaperSize::A2Portrait,
        PaperSize::A2Landscape,
        PaperSize::A1Portrait,
        PaperSize::A1Landscape,
        PaperSize::A0Portrait,
        PaperSize::A0Landscape,
        PaperSize::LetterPortrait,
        PaperSize::LetterLandscape,
        PaperSize::LegalPortrait,
        PaperSize::LegalLandscape,
        PaperSize::Slide4x3,
        PaperSize::Slide16x9,
    ];

    /// Registry name, as written in definitions and workspaces
    pub fn name(&self) -> &'static str {
        match self {
            PaperSize::A6Portrait => "A6_Portrait",
            PaperSize::A6Landscape => "A6_Landscape",
            PaperSize::A5Portrait => "A5_Portrait",
            PaperSize::A5Landscape => "A5_Landscape",
            PaperSize::A4Portrait => "A4_Portrait",
            PaperSize::A4Landscape => "A4_Landscape",
            PaperSize::A3Portrait => "A3_Portrait",
            PaperSize::A3Landscape => "A3_Landscape",
            PaperSize::A2Portrait => "A2_Portrait",
            PaperSize::A2Landscape => "A2_Landscape",
            PaperSize::A1Portrait => "A1_Portrait",
            PaperSize::A1Landscape => "A1_Landscape",
            PaperSize::A0Portrait => "A0_Portrait",
            PaperSize::A0Landscape => "A0_Landscape",
            PaperSize::LetterPortrait => "Letter_Portrait",
            PaperSize::LetterLandscape => "Letter_Landscape",
            PaperSize::LegalPortrait => "Legal_Portrait",
            PaperSize::LegalLandscape => "Legal_Landscape",
            PaperSize::Slide4x3 => "Slide_4_3",
            PaperSize::Slide16x9 => "Slide_16_9",
        }
    }

    /// Width and height in pixels
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            PaperSize::A6Portrait => (1240, 1748),
            PaperSize::A6Landscape => (1748, 1240),
            PaperSize::A5Portrait => (1748, 2480),
            PaperSize::A5Landscape => (2480, 1748),
            PaperSize::A4Portrait => (2480, 3508),
            PaperSize::A4Landscape => (3508, 2480),
            PaperSize::A3Portrait => (3508, 4961),
            PaperSize::A3Landscape => (4961, 3508),
            PaperSize::A2Portrait => (4961, 7016),
            PaperSize::A2Landscape => (7016, 4961),
            PaperSize::A1Portrait => (7016, 9933),
            PaperSize::A1Landscape => (9933, 7016),
            PaperSize::A0Portrait => (9933, 14043),
            PaperSize::A0Landscape => (14043, 9933),
            PaperSize::LetterPortrait => (2550, 3300),
            PaperSize::LetterLandscape => (3300, 2550),
            PaperSize::LegalPortrait => (2550, 4200),
            PaperSize::LegalLandscape => (4200, 2550),
            PaperSize::Slide4x3 => (3306, 2480),
            PaperSize::Slide16x9 => (3508, 1973),
        }
    }

    /// Look up a size by name, falling back to the default for absent or
    /// unknown names
    pub fn resolve(name: Option<&str>) -> Self {
        name.and_then(|name| name.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for PaperSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaperSize::ALL
            .into_iter()
            .find(|size| size.name() == s)
            .ok_or_else(|| format!("Unknown paper size: {}", s))
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for PaperSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
