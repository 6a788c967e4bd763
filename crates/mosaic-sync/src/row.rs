//! Persisted rows and group changesets
//!
//! One logical content group is the set of per-language rows sharing a
//! `group_id`. The group id is minted once at group creation and never
//! changes; `order` is purely the display position and may be re-sequenced
//! at any time without touching identity, so reordering can never orphan a
//! language row.

use crate::language::Language;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One persisted language row of a logical content group.
///
/// At most one row exists per `(group_id, language)`. The row id is stable
/// across edits: the synchronizer updates rows in place rather than
/// delete-and-recreate, so external references to a row id survive saves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRow {
	/// Row id, stable for the row's lifetime
	pub id: Uuid,
	/// Immutable id of the logical group this row belongs to
	pub group_id: Uuid,
	/// Owning page/solution entity
	pub parent_id: Uuid,
	/// Language of this row's content
	pub language: Language,
	/// Section title in this language
	pub title: String,
	/// JSON-encoded stored envelope (`StoredContent`): `{html, json}`
	pub content: String,
	/// Section type tag the host application routes on, e.g. `"about"`
	pub kind: String,
	/// Display position among the parent's groups
	pub order: u32,
	/// First save time
	pub created_at: DateTime<Utc>,
	/// Last save time
	pub updated_at: DateTime<Utc>,
}

/// The write set of one group reconciliation, applied atomically by
/// [`SectionStore::commit`](crate::store::SectionStore::commit).
#[derive(Debug, Clone, Default)]
pub struct GroupChangeset {
	/// Rows created by this save
	pub inserts: Vec<SectionRow>,
	/// Rows updated in place by this save
	pub updates: Vec<SectionRow>,
}

impl GroupChangeset {
	/// True when the save touches nothing.
	pub fn is_empty(&self) -> bool {
		self.inserts.is_empty() && self.updates.is_empty()
	}

	/// Number of rows written.
	pub fn len(&self) -> usize {
		self.inserts.len() + self.updates.len()
	}
}
