//! Card identity: rank, suit, and the short card code.
//!
//! A card is a `(Rank, Suit)` pair. Its code is the rank code followed by the
//! suit code, e.g. `"AS"`, `"8H"`, `"10D"`. Codes are upper-case and parsing is
//! case-sensitive.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::config::ScoringVariant;
use crate::error::CardParseError;

/// The four suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in standard deck order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Single-letter code.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }

    /// Parse a single-letter suit code.
    pub fn from_code(c: char) -> Result<Self, CardParseError> {
        match c {
            'H' => Ok(Suit::Hearts),
            'D' => Ok(Suit::Diamonds),
            'C' => Ok(Suit::Clubs),
            'S' => Ok(Suit::Spades),
            other => Err(CardParseError::UnknownSuit(other)),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        };
        f.write_str(name)
    }
}

/// The thirteen ranks, Ace low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks, Ace through King.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Rank code: `"A"`, `"2"`..`"10"`, `"J"`, `"Q"`, `"K"`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// Parse a rank code.
    pub fn from_code(code: &str) -> Result<Self, CardParseError> {
        Rank::ALL
            .into_iter()
            .find(|r| r.code() == code)
            .ok_or_else(|| CardParseError::UnknownRank(code.to_string()))
    }

    /// Eights are wild.
    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, Rank::Eight)
    }

    /// Numeric face value, 1 for Ace through 13 for King.
    #[must_use]
    pub const fn face_value(self) -> u32 {
        self as u32 + 1
    }

    /// End-of-game penalty points under the given scoring variant.
    ///
    /// Both variants score Ace as 1, 2-9 at face value and 10/J/Q/K as 10.
    /// `Classic` additionally scores the wild 8 at 50.
    #[must_use]
    pub const fn points(self, variant: ScoringVariant) -> u32 {
        match (self, variant) {
            (Rank::Eight, ScoringVariant::Classic) => 50,
            (Rank::Ten | Rank::Jack | Rank::Queen | Rank::King, _) => 10,
            _ => self.face_value(),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Ace => f.write_str("Ace"),
            Rank::Jack => f.write_str("Jack"),
            Rank::Queen => f.write_str("Queen"),
            Rank::King => f.write_str("King"),
            other => f.write_str(other.code()),
        }
    }
}

/// A playing card.
///
/// Identity is the `(rank, suit)` pair; the code is derived on demand.
///
/// ```
/// use crazy_eights::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ten, Suit::Hearts);
/// assert_eq!(card.code(), "10H");
/// assert_eq!(Card::from_code("10H").unwrap(), card);
/// assert_eq!(card.to_string(), "10 of Hearts");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Two- or three-character code, e.g. `"QS"` or `"10C"`.
    #[must_use]
    pub fn code(&self) -> String {
        let mut code = String::with_capacity(3);
        code.push_str(self.rank.code());
        code.push(self.suit.code());
        code
    }

    /// Parse a card code. Inverse of [`Card::code`].
    ///
    /// The suit is always the last character; everything before it is the rank.
    pub fn from_code(code: &str) -> Result<Self, CardParseError> {
        let len = code.chars().count();
        if !(2..=3).contains(&len) {
            return Err(CardParseError::BadLength(len));
        }

        let mut chars = code.chars();
        let suit_char = chars.next_back().ok_or(CardParseError::BadLength(len))?;
        let suit = Suit::from_code(suit_char)?;
        let rank = Rank::from_code(chars.as_str())?;

        Ok(Self { rank, suit })
    }

    /// Penalty points held by this card at game end.
    #[must_use]
    pub const fn point_value(&self, variant: ScoringVariant) -> u32 {
        self.rank.points(variant)
    }

    #[must_use]
    pub const fn is_wild(&self) -> bool {
        self.rank.is_wild()
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::from_code(s)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}
