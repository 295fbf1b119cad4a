// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Five-card poker hand classification.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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
    /// Position on the low ladder, with the ace at the bottom. The ace may
    /// also play high as position 13 when it caps a straight.
    const fn ladder(self) -> u8 {
        match self {
            Rank::Ace => 0,
            Rank::Two => 1,
            Rank::Three => 2,
            Rank::Four => 3,
            Rank::Five => 4,
            Rank::Six => 5,
            Rank::Seven => 6,
            Rank::Eight => 7,
            Rank::Nine => 8,
            Rank::Ten => 9,
            Rank::Jack => 10,
            Rank::Queen => 11,
            Rank::King => 12,
        }
    }

    const fn symbol(self) -> &'static str {
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
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,
    Spades,
    Diamonds,
    Clubs,
}

impl Suit {
    const fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }
}

/// One playing card, parsed from text like `A♥`, `10♦` or `k♣`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut chars = text.chars();
        let suit_char = chars.next_back().ok_or(ParseCardError::Empty)?;
        let suit = match suit_char {
            '♥' => Suit::Hearts,
            '♠' => Suit::Spades,
            '♦' => Suit::Diamonds,
            '♣' => Suit::Clubs,
            other => return Err(ParseCardError::UnknownSuit(other)),
        };

        let rank = match chars.as_str() {
            "A" | "a" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" => Rank::Ten,
            "J" | "j" => Rank::Jack,
            "Q" | "q" => Rank::Queen,
            "K" | "k" => Rank::King,
            other => return Err(ParseCardError::UnknownRank(other.to_owned())),
        };

        Ok(Card { rank, suit })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCardError {
    Empty,
    UnknownRank(String),
    UnknownSuit(char),
}

impl fmt::Display for ParseCardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("card text must not be empty"),
            Self::UnknownRank(text) => write!(f, "unknown card rank '{text}'"),
            Self::UnknownSuit(ch) => write!(f, "unknown card suit '{ch}'"),
        }
    }
}

impl std::error::Error for ParseCardError {}

/// Hand categories from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandRank {
    HighCard = 0,
    OnePair = 1,
    TwoPairs = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl HandRank {
    pub const fn score(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            HandRank::HighCard => "high card",
            HandRank::OnePair => "one pair",
            HandRank::TwoPairs => "two pairs",
            HandRank::ThreeOfAKind => "three of a kind",
            HandRank::Straight => "straight",
            HandRank::Flush => "flush",
            HandRank::FullHouse => "full house",
            HandRank::FourOfAKind => "four of a kind",
            HandRank::StraightFlush => "straight flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses one card from text, last character carrying the suit.
pub fn parse_card(text: &str) -> Result<Card, ParseCardError> {
    text.parse()
}

/// Classifies a five-card hand into its strongest category.
pub fn hand_rank(cards: &[Card; 5]) -> HandRank {
    let mut counts: SmallVec<[(Rank, u8); 5]> = SmallVec::new();
    for card in cards {
        match counts.iter_mut().find(|(rank, _)| *rank == card.rank) {
            Some((_, count)) => *count += 1,
            None => counts.push((card.rank, 1)),
        }
    }

    let flush = cards.iter().all(|card| card.suit == cards[0].suit);
    let straight = is_straight(&counts);
    let of_a_kind = |want: u8| counts.iter().filter(|(_, count)| *count == want).count();

    if flush && straight {
        HandRank::StraightFlush
    } else if of_a_kind(4) > 0 {
        HandRank::FourOfAKind
    } else if of_a_kind(3) > 0 && of_a_kind(2) > 0 {
        HandRank::FullHouse
    } else if flush {
        HandRank::Flush
    } else if straight {
        HandRank::Straight
    } else if of_a_kind(3) > 0 {
        HandRank::ThreeOfAKind
    } else if of_a_kind(2) == 2 {
        HandRank::TwoPairs
    } else if of_a_kind(2) == 1 {
        HandRank::OnePair
    } else {
        HandRank::HighCard
    }
}

fn is_straight(counts: &[(Rank, u8)]) -> bool {
    if counts.len() < 5 {
        return false;
    }

    let mut ladder: SmallVec<[u8; 5]> = counts.iter().map(|(rank, _)| rank.ladder()).collect();
    ladder.sort_unstable();

    // The ace plays high unless the deuce anchors a wheel.
    if ladder[0] == Rank::Ace.ladder() && ladder[1] != Rank::Two.ladder() {
        ladder.remove(0);
        ladder.push(13);
    }

    ladder.windows(2).all(|pair| pair[1] == pair[0] + 1)
}
