//! Wordle feedback colorings
//!
//! A [`Coloring`] is the five-symbol feedback for one guess. Besides the
//! symbol array it can be packed into a base-3 value (0-242), where each
//! position contributes digit × 3^position:
//! - 0 = Absent (gray)
//! - 1 = Misplaced (yellow)
//! - 2 = Correct (green)

use super::word::{WORD_LEN, Word};
use std::fmt;
use thiserror::Error;

/// Feedback for a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Letter not in the solution, or all its occurrences accounted for
    Absent,
    /// Letter in the solution at another position
    Misplaced,
    /// Letter at exactly this position
    Correct,
}

impl Color {
    /// All colors, in enumeration order
    pub const ALL: [Self; 3] = [Self::Correct, Self::Misplaced, Self::Absent];

    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Misplaced => 1,
            Self::Correct => 2,
        }
    }

    /// Whether this color credits the letter as present in the solution
    #[inline]
    #[must_use]
    pub const fn is_present(self) -> bool {
        matches!(self, Self::Misplaced | Self::Correct)
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Absent => '⬜',
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Misplaced),
            '-' | '_' | '.' | 'x' | 'X' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "green" => Some(Self::Correct),
            "yellow" => Some(Self::Misplaced),
            "grey" | "gray" => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Error type for malformed feedback
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColoringError {
    #[error("feedback must have exactly 5 colors, got {0}")]
    InvalidLength(usize),
    #[error("unrecognized color '{0}'")]
    InvalidSymbol(String),
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coloring([Color; WORD_LEN]);

impl Coloring {
    /// All greens (perfect match)
    pub const ALL_CORRECT: Self = Self([Color::Correct; WORD_LEN]);

    #[inline]
    #[must_use]
    pub const fn new(colors: [Color; WORD_LEN]) -> Self {
        Self(colors)
    }

    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[Color; WORD_LEN] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> Color {
        self.0[position]
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::ALL_CORRECT
    }

    /// Pack into a base-3 value in `0..243`
    #[must_use]
    pub fn value(&self) -> u8 {
        self.0
            .iter()
            .rev()
            .fold(0u8, |acc, color| acc * 3 + color.digit())
    }

    /// Compute the feedback when `guess` is played against `solution`
    ///
    /// Greens are assigned first and consume the solution's letters, so a
    /// repeated guess letter is only credited as many times as the solution
    /// contains it.
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::core::{Coloring, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let solution = Word::new("slate").unwrap();
    /// let coloring = Coloring::color_for(&guess, &solution);
    ///
    /// assert_eq!(coloring, "--G-G".parse().unwrap());
    /// ```
    #[must_use]
    pub fn color_for(guess: &Word, solution: &Word) -> Self {
        let mut colors = [Color::Absent; WORD_LEN];
        let mut remaining = solution.letter_counts();
        let guess = guess.chars();
        let solution = solution.chars();

        for i in 0..WORD_LEN {
            if guess[i] == solution[i] {
                colors[i] = Color::Correct;
                remaining.take(guess[i]);
            }
        }

        for i in 0..WORD_LEN {
            if colors[i] != Color::Correct && remaining.take(guess[i]) {
                colors[i] = Color::Misplaced;
            }
        }

        Self(colors)
    }

    /// Parse feedback text
    ///
    /// Accepts either five symbols (`G`/`Y`/`-` and their emoji forms) or
    /// five comma-separated color names (`green,yellow,grey,...`).
    ///
    /// # Errors
    /// Returns `ColoringError` on a wrong count or any unknown symbol.
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::core::Coloring;
    ///
    /// let a = Coloring::parse("GY-GY").unwrap();
    /// let b = Coloring::parse("🟩🟨⬜🟩🟨").unwrap();
    /// let c = Coloring::parse("green, yellow, grey, green, yellow").unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(a, c);
    /// ```
    pub fn parse(text: &str) -> Result<Self, ColoringError> {
        let text = text.trim();

        let colors: Vec<Color> = if text.contains(',') {
            text.split(',')
                .map(|name| {
                    Color::from_name(name)
                        .ok_or_else(|| ColoringError::InvalidSymbol(name.trim().to_string()))
                })
                .collect::<Result<_, _>>()?
        } else {
            text.chars()
                .map(|symbol| {
                    Color::from_symbol(symbol)
                        .ok_or_else(|| ColoringError::InvalidSymbol(symbol.to_string()))
                })
                .collect::<Result<_, _>>()?
        };

        Self::try_from(colors.as_slice())
    }

    /// Render as emoji squares
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|color| color.to_emoji()).collect()
    }
}

impl TryFrom<&[Color]> for Coloring {
    type Error = ColoringError;

    fn try_from(colors: &[Color]) -> Result<Self, Self::Error> {
        let colors: [Color; WORD_LEN] = colors
            .try_into()
            .map_err(|_| ColoringError::InvalidLength(colors.len()))?;
        Ok(Self(colors))
    }
}

impl std::str::FromStr for Coloring {
    type Err = ColoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Coloring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
