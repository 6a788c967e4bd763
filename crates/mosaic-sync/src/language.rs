//! Supported content languages
//!
//! Groups may be partially translated: a payload set missing a language is
//! never an error, and reads for a missing language simply return nothing.

use crate::error::{SyncError, SyncResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A language a content group can be published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
	/// Turkish
	Tr,
	/// English
	En,
	/// German
	De,
	/// French
	Fr,
}

impl Language {
	/// Every supported language, in canonical order.
	pub const ALL: [Language; 4] = [Language::Tr, Language::En, Language::De, Language::Fr];

	/// Lowercase ISO 639-1 code, matching the serialized form.
	pub fn as_str(&self) -> &'static str {
		match self {
			Language::Tr => "tr",
			Language::En => "en",
			Language::De => "de",
			Language::Fr => "fr",
		}
	}
}

impl fmt::Display for Language {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Language {
	type Err = SyncError;

	fn from_str(s: &str) -> SyncResult<Self> {
		match s {
			"tr" => Ok(Language::Tr),
			"en" => Ok(Language::En),
			"de" => Ok(Language::De),
			"fr" => Ok(Language::Fr),
			other => Err(SyncError::UnsupportedLanguage(other.to_string())),
		}
	}
}
