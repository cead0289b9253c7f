//! Encode and decode over a `CodeTable`.
//!
//! Both directions are pure: no I/O, no logging, no partial output. A message
//! is tokenized only on the delimiter; tokens are 2 or 3 digits long, so
//! fixed-width splitting would corrupt older messages.

use crate::config::DELIMITER;
use crate::error::{CodecError, CoreResult};
use crate::table::CodeTable;

/// Borrowing handle over a code table.
#[derive(Debug, Clone, Copy)]
pub struct Codec<'a> {
    table: &'a CodeTable,
}

impl<'a> Codec<'a> {
    pub fn new(table: &'a CodeTable) -> Self {
        Self { table }
    }

    /// Codec over the canonical table.
    pub fn standard() -> CoreResult<Codec<'static>> {
        Ok(Codec::new(CodeTable::standard()?))
    }

    pub fn table(&self) -> &'a CodeTable {
        self.table
    }

    /// Replaces each character with its token and joins them with the delimiter.
    pub fn encode(&self, text: &str) -> Result<String, CodecError> {
        let mut encoded = String::with_capacity(text.len() * 3);

        for (position, character) in text.chars().enumerate() {
            let token = self
                .table
                .token_for(character)
                .ok_or(CodecError::UnsupportedCharacter {
                    character,
                    position,
                })?;

            if position > 0 {
                encoded.push(DELIMITER);
            }
            encoded.push_str(token);
        }

        Ok(encoded)
    }

    /// Splits on the delimiter and maps every token back to its character.
    pub fn decode(&self, code: &str) -> Result<String, CodecError> {
        if code.is_empty() {
            return Ok(String::new());
        }

        code.split(DELIMITER)
            .enumerate()
            .map(|(position, token)| self.decode_token(token, position))
            .collect()
    }

    fn decode_token(&self, token: &str, position: usize) -> Result<char, CodecError> {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CodecError::MalformedToken {
                token: token.to_string(),
                position,
            });
        }

        self.table
            .char_for(token)
            .ok_or_else(|| CodecError::UnknownToken {
                token: token.to_string(),
                position,
            })
    }
}

/// Encodes `text` with the canonical table.
pub fn encode(text: &str) -> CoreResult<String> {
    Ok(Codec::standard()?.encode(text)?)
}

/// Decodes `code` with the canonical table.
pub fn decode(code: &str) -> CoreResult<String> {
    Ok(Codec::standard()?.decode(code)?)
}
