//! Storage abstraction for section rows
//!
//! The engine never talks to a database directly; the host application hands
//! it a [`SectionStore`]. The bundled [`InMemorySectionStore`] backs tests
//! and small deployments.
//!
//! [`SectionStore::commit`] is the transaction boundary: it applies one
//! group's inserts and updates atomically with respect to other editors of
//! the same group. No cross-group locking is required — groups are
//! independent.

use crate::language::Language;
use crate::row::{GroupChangeset, SectionRow};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Errors surfaced by a [`SectionStore`] implementation.
#[derive(Error, Debug)]
pub enum StoreError {
	/// An update targeted a row that does not exist
	#[error("row not found: {0}")]
	RowNotFound(Uuid),

	/// A concurrent editor already created a row for the same group and
	/// language; the caller should re-read the group and resubmit
	#[error("conflicting row for group {group_id} language {language}")]
	Conflict {
		/// Group the conflicting insert targeted
		group_id: Uuid,
		/// Language already present
		language: Language,
	},

	/// Backend failure
	#[error("storage backend error: {0}")]
	Backend(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage interface the synchronizer and boundary service run against.
#[async_trait]
pub trait SectionStore: Send + Sync {
	/// Whether the owning page/solution entity exists.
	async fn parent_exists(&self, parent_id: Uuid) -> StoreResult<bool>;

	/// All rows of one group, sorted by language in canonical order.
	async fn rows_in_group(&self, group_id: Uuid) -> StoreResult<Vec<SectionRow>>;

	/// All rows at a display position of a parent — the editor-facing
	/// lookup convenience; group identity itself is the group id.
	async fn rows_by_position(&self, parent_id: Uuid, order: u32) -> StoreResult<Vec<SectionRow>>;

	/// Every row of a parent, sorted by `(order, language)`.
	async fn rows_by_parent(&self, parent_id: Uuid) -> StoreResult<Vec<SectionRow>>;

	/// Highest `order` among the parent's rows, `None` when it has none.
	async fn max_order(&self, parent_id: Uuid) -> StoreResult<Option<u32>>;

	/// Apply one group's changeset atomically.
	///
	/// Inserts colliding with an existing `(group_id, language)` row fail
	/// the whole commit with [`StoreError::Conflict`]; updates of missing
	/// rows fail it with [`StoreError::RowNotFound`]. Nothing is written on
	/// failure.
	async fn commit(&self, changeset: GroupChangeset) -> StoreResult<()>;

	/// Move every row of a group to a new display position, atomically.
	async fn set_group_order(&self, group_id: Uuid, order: u32) -> StoreResult<()>;

	/// Delete one row.
	async fn delete_row(&self, id: Uuid) -> StoreResult<()>;

	/// Delete every row of a group, returning how many went away.
	async fn delete_group(&self, group_id: Uuid) -> StoreResult<usize>;
}

/// In-memory [`SectionStore`] backend.
///
/// Rows live in a single map guarded by an async `RwLock`; `commit` holds
/// the write lock for the whole changeset, which is what makes a group save
/// atomic here. Parents are registered explicitly — the engine only checks
/// existence, it does not own parent entities.
#[derive(Clone, Default)]
pub struct InMemorySectionStore {
	rows: Arc<RwLock<HashMap<Uuid, SectionRow>>>,
	parents: Arc<RwLock<HashSet<Uuid>>>,
}

impl InMemorySectionStore {
	/// Create an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Register an owning entity so saves against it pass the parent check.
	pub async fn register_parent(&self, parent_id: Uuid) {
		self.parents.write().await.insert(parent_id);
	}

	fn sort_rows(rows: &mut [SectionRow]) {
		rows.sort_by_key(|row| (row.order, language_rank(row.language)));
	}
}

fn language_rank(language: Language) -> usize {
	Language::ALL
		.iter()
		.position(|candidate| *candidate == language)
		.unwrap_or(Language::ALL.len())
}

#[async_trait]
impl SectionStore for InMemorySectionStore {
	async fn parent_exists(&self, parent_id: Uuid) -> StoreResult<bool> {
		Ok(self.parents.read().await.contains(&parent_id))
	}

	async fn rows_in_group(&self, group_id: Uuid) -> StoreResult<Vec<SectionRow>> {
		let rows = self.rows.read().await;
		let mut matched: Vec<SectionRow> = rows
			.values()
			.filter(|row| row.group_id == group_id)
			.cloned()
			.collect();
		Self::sort_rows(&mut matched);
		Ok(matched)
	}

	async fn rows_by_position(&self, parent_id: Uuid, order: u32) -> StoreResult<Vec<SectionRow>> {
		let rows = self.rows.read().await;
		let mut matched: Vec<SectionRow> = rows
			.values()
			.filter(|row| row.parent_id == parent_id && row.order == order)
			.cloned()
			.collect();
		Self::sort_rows(&mut matched);
		Ok(matched)
	}

	async fn rows_by_parent(&self, parent_id: Uuid) -> StoreResult<Vec<SectionRow>> {
		let rows = self.rows.read().await;
		let mut matched: Vec<SectionRow> = rows
			.values()
			.filter(|row| row.parent_id == parent_id)
			.cloned()
			.collect();
		Self::sort_rows(&mut matched);
		Ok(matched)
	}

	async fn max_order(&self, parent_id: Uuid) -> StoreResult<Option<u32>> {
		let rows = self.rows.read().await;
		Ok(rows
			.values()
			.filter(|row| row.parent_id == parent_id)
			.map(|row| row.order)
			.max())
	}

	async fn commit(&self, changeset: GroupChangeset) -> StoreResult<()> {
		let mut rows = self.rows.write().await;

		// Validate the whole changeset before writing any of it.
		for insert in &changeset.inserts {
			let collision = rows.values().any(|row| {
				row.group_id == insert.group_id && row.language == insert.language
			});
			if collision {
				return Err(StoreError::Conflict {
					group_id: insert.group_id,
					language: insert.language,
				});
			}
		}
		for update in &changeset.updates {
			if !rows.contains_key(&update.id) {
				return Err(StoreError::RowNotFound(update.id));
			}
		}

		for row in changeset.inserts.into_iter().chain(changeset.updates) {
			rows.insert(row.id, row);
		}
		Ok(())
	}

	async fn set_group_order(&self, group_id: Uuid, order: u32) -> StoreResult<()> {
		let mut rows = self.rows.write().await;
		for row in rows.values_mut() {
			if row.group_id == group_id {
				row.order = order;
			}
		}
		Ok(())
	}

	async fn delete_row(&self, id: Uuid) -> StoreResult<()> {
		let mut rows = self.rows.write().await;
		rows.remove(&id).ok_or(StoreError::RowNotFound(id))?;
		Ok(())
	}

	async fn delete_group(&self, group_id: Uuid) -> StoreResult<usize> {
		let mut rows = self.rows.write().await;
		let before = rows.len();
		rows.retain(|_, row| row.group_id != group_id);
		Ok(before - rows.len())
	}
}
