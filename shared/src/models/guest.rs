//! Guest Model

use serde::{Deserialize, Serialize};

/// Guest entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: String,
    pub full_name: String,
    /// Cached occupancy flag, recomputed from table seats after every change
    #[serde(default)]
    pub seated: bool,
}

impl Guest {
    pub fn new(id: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            seated: false,
        }
    }

    /// Initials shown on a chair badge
    ///
    /// "John Doe" -> "JD"; a single word yields its first two characters;
    /// at most three initials are kept.
    pub fn initials(&self) -> String {
        let trimmed = self.full_name.trim();
        let words: Vec<&str> = trimmed.split_whitespace().collect();
        match words.len() {
            0 => String::new(),
            1 => trimmed.chars().take(2).collect::<String>().to_uppercase(),
            _ => words
                .iter()
                .filter_map(|word| word.chars().next())
                .flat_map(char::to_uppercase)
                .take(3)
                .collect(),
        }
    }
}

/// Guest record as produced by a guest-list import
///
/// `full_name` is derived from the name parts when absent. Any `seated`
/// value the importer sends is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuestImport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl GuestImport {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Full name, falling back to "first last"
    pub fn display_name(&self) -> String {
        match self.full_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("{} {}", self.first_name, self.last_name)
                .trim()
                .to_string(),
        }
    }
}
