//! The character/token code table.
//!
//! The table maps every supported character to a short digit string and keeps
//! the exact inverse alongside it. Both directions are built together, so a
//! table that would make decoding ambiguous can never be constructed.

use crate::config::{MAX_TOKEN_LEN, MIN_TOKEN_LEN};
use crate::error::TableIntegrityError;

use once_cell::sync::OnceCell;
use std::collections::HashMap;

/// Canonical assignments. Changing any of these breaks every message
/// written by earlier versions.
pub const STANDARD_ENTRIES: [(char, &str); 60] = [
    ('A', "56"), ('B', "57"), ('C', "58"), ('D', "59"), ('E', "40"), ('F', "41"),
    ('G', "42"), ('H', "43"), ('I', "44"), ('J', "45"), ('K', "46"), ('L', "47"),
    ('M', "48"), ('N', "49"), ('O', "60"), ('P', "61"), ('Q', "62"), ('R', "63"),
    ('S', "64"), ('T', "65"), ('U', "66"), ('V', "67"), ('W', "68"), ('X', "69"),
    ('Y', "10"), ('Z', "11"), ('a', "12"), ('b', "13"), ('c', "14"), ('d', "15"),
    ('e', "16"), ('f', "17"), ('g', "18"), ('h', "19"), ('i', "30"), ('j', "31"),
    ('k', "32"), ('l', "33"), ('m', "34"), ('n', "35"), ('o', "36"), ('p', "37"),
    ('q', "38"), ('r', "39"), ('s', "90"), ('t', "91"), ('u', "92"), ('v', "93"),
    ('w', "94"), ('x', "95"), ('y', "96"), ('z', "97"), (' ', "98"), (',', "99"),
    ('.', "100"), (';', "101"), ('\'', "102"), ('?', "103"), ('!', "104"), (':', "105"),
];

static STANDARD: OnceCell<CodeTable> = OnceCell::new();

/// Bijective mapping between characters and digit-string tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    /// Characters in the order they were supplied
    order: Vec<char>,
    tokens: HashMap<char, String>,
    chars: HashMap<String, char>,
}

impl CodeTable {
    /// Builds a table from `(character, token)` pairs, validating as it goes.
    ///
    /// Fails if the list is empty, if a character or token repeats, or if a
    /// token is not an ASCII digit string of the allowed length.
    pub fn new<I, S>(entries: I) -> Result<Self, TableIntegrityError>
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        let mut order = Vec::new();
        let mut tokens = HashMap::new();
        let mut chars = HashMap::new();

        for (character, token) in entries {
            let token = token.into();

            if !is_valid_token(&token) {
                return Err(TableIntegrityError::InvalidToken {
                    character,
                    token,
                    min: MIN_TOKEN_LEN,
                    max: MAX_TOKEN_LEN,
                });
            }

            if tokens.contains_key(&character) {
                return Err(TableIntegrityError::DuplicateCharacter { character });
            }

            if let Some(&first) = chars.get(&token) {
                return Err(TableIntegrityError::DuplicateToken {
                    token,
                    first,
                    second: character,
                });
            }

            order.push(character);
            tokens.insert(character, token.clone());
            chars.insert(token, character);
        }

        if order.is_empty() {
            return Err(TableIntegrityError::Empty);
        }

        Ok(Self {
            order,
            tokens,
            chars,
        })
    }

    /// The canonical table, built and validated on first use.
    pub fn standard() -> Result<&'static CodeTable, TableIntegrityError> {
        STANDARD.get_or_try_init(|| CodeTable::new(STANDARD_ENTRIES))
    }

    #[inline]
    pub fn token_for(&self, character: char) -> Option<&str> {
        self.tokens.get(&character).map(String::as_str)
    }

    #[inline]
    pub fn char_for(&self, token: &str) -> Option<char> {
        self.chars.get(token).copied()
    }

    #[inline]
    pub fn contains(&self, character: char) -> bool {
        self.tokens.contains_key(&character)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Entries in their original order.
    pub fn entries(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.order
            .iter()
            .map(move |c| (*c, self.tokens[c].as_str()))
    }
}

fn is_valid_token(token: &str) -> bool {
    (MIN_TOKEN_LEN..=MAX_TOKEN_LEN).contains(&token.len())
        && token.bytes().all(|b| b.is_ascii_digit())
}
