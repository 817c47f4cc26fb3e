use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Board, TileGrid};
use crate::error::{ConfigError, FormatError};
use crate::types::SIZE;

/// Row separator in the configuration text format. The surrounding spaces
/// are part of the separator.
const ROW_SEPARATOR: &str = " : ";

/// Immutable holder of a raw textual grid description, e.g.
/// `"15 2 1 12 : 8 5 6 11 : 4 9 10 7 : 3 14 13 0"`. Structural validity is
/// checked lazily when the configuration is applied to a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Configuration {
    data: String,
}

impl Configuration {
    /// Wraps the raw text. Fails only on empty input; shape and tile
    /// contents are checked by [`Configuration::apply_to`].
    pub fn new(data: impl Into<String>) -> Result<Self, FormatError> {
        let data = data.into();
        if data.is_empty() {
            return Err(FormatError::Empty);
        }
        Ok(Self { data })
    }

    /// The raw configuration text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.data
    }

    /// Parses the text and writes the tile values into `board`, then runs
    /// the board's validity check. The board contents are unspecified after
    /// an error; callers discard the board in that case.
    pub fn apply_to<G: TileGrid>(&self, board: &mut Board<G>) -> Result<(), ConfigError> {
        let rows: Vec<&str> = self.data.split(ROW_SEPARATOR).collect();
        if rows.len() != SIZE {
            return Err(FormatError::RowCount(rows.len()).into());
        }
        for (i, row) in rows.iter().enumerate() {
            let values: Vec<&str> = row.split_whitespace().collect();
            if values.len() != SIZE {
                return Err(FormatError::ColumnCount {
                    row: i,
                    found: values.len(),
                }
                .into());
            }
            for (j, token) in values.iter().enumerate() {
                let value: u8 = token.parse().map_err(|_| FormatError::Token {
                    row: i,
                    token: (*token).to_string(),
                })?;
                board.put(i, j, value);
            }
        }
        board.ensure_validity()?;
        Ok(())
    }
}

impl TryFrom<String> for Configuration {
    type Error = FormatError;

    fn try_from(data: String) -> Result<Self, Self::Error> {
        Configuration::new(data)
    }
}

impl From<Configuration> for String {
    fn from(config: Configuration) -> String {
        config.data
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}
