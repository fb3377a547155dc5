// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// Display scale for the numeral at the center of the rings.
///
/// The central numeral shows the minutes left in the day, which ranges from one to four
/// digits. The scale shrinks as digits are added so that the widest value, 1439, still fits
/// inside the innermost ring.
///
/// # Examples
///
/// ```
/// use countdown::NumeralScale;
///
/// assert_eq!(NumeralScale::for_value(7), NumeralScale::Large);
/// assert_eq!(NumeralScale::for_value(250), NumeralScale::Medium);
/// assert_eq!(NumeralScale::for_value(1439).font_size(), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumeralScale {
    /// One or two digits.
    Large,
    /// Three digits.
    Medium,
    /// Four or more digits.
    Small,
}

impl NumeralScale {
    /// Picks the scale for displaying `value`.
    #[must_use]
    pub const fn for_value(value: u64) -> Self {
        match digits(value) {
            0..=2 => Self::Large,
            3 => Self::Medium,
            _ => Self::Small,
        }
    }

    /// The font size, in points of a 420-unit square face, for this scale.
    #[must_use]
    pub const fn font_size(self) -> u16 {
        match self {
            Self::Large => 100,
            Self::Medium => 80,
            Self::Small => 60,
        }
    }
}

const fn digits(value: u64) -> u32 {
    match value.checked_ilog10() {
        Some(log) => log + 1,
        None => 1,
    }
}
