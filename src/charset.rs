const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NUMERIC: &[u8] = b"0123456789";
const SPECIAL_SIMPLE: &[u8] = b"!@#$%*()-_=+.?";
const SPECIAL_ADVANCED: &[u8] = b"[]{}<>^&;:,";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lower,
    Upper,
    Numeric,
    SpecialSimple,
    SpecialAdvanced,
}

impl CharClass {
    // Registry order.
    pub const ALL: [CharClass; 5] = [
        CharClass::Lower,
        CharClass::Upper,
        CharClass::Numeric,
        CharClass::SpecialSimple,
        CharClass::SpecialAdvanced,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Lower => "lower",
            CharClass::Upper => "upper",
            CharClass::Numeric => "numeric",
            CharClass::SpecialSimple => "specialSimple",
            CharClass::SpecialAdvanced => "specialAdvanced",
        }
    }

    pub fn chars(self) -> &'static [u8] {
        match self {
            CharClass::Lower => LOWER,
            CharClass::Upper => UPPER,
            CharClass::Numeric => NUMERIC,
            CharClass::SpecialSimple => SPECIAL_SIMPLE,
            CharClass::SpecialAdvanced => SPECIAL_ADVANCED,
        }
    }

    pub fn contains(self, ch: char) -> bool {
        ch.is_ascii() && self.chars().contains(&(ch as u8))
    }
}

pub fn concat(classes: &[CharClass]) -> Vec<u8> {
    classes
        .iter()
        .flat_map(|class| class.chars().iter().copied())
        .collect()
}

// Inputs are checked against every class, not just the selected policy's.
pub fn is_permitted(ch: char) -> bool {
    CharClass::ALL.iter().any(|class| class.contains(ch))
}
