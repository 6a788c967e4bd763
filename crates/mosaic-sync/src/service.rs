//! Boundary operations
//!
//! [`ContentService`] is the surface the host CRUD layer calls: save a
//! section in one language or a whole group at once, read a group back for
//! editing, read a page's sections for display, re-sequence and delete.
//! Rendering always happens here, on save — the HTML and the JSON mirror
//! are regenerated together, never patched independently.

use crate::error::{SyncError, SyncResult};
use crate::language::Language;
use crate::row::SectionRow;
use crate::store::SectionStore;
use crate::sync::{reconcile, GroupContext, LocalizedPayload};
use chrono::Utc;
use mosaic_content::block::ContentBlock;
use mosaic_content::render::{render, RenderConfig, StoredContent};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Save request for a single language.
#[derive(Debug, Clone)]
pub struct SaveSection {
	/// Owning page/solution entity
	pub parent_id: Uuid,
	/// Display position addressing an existing group, or `None` to append a
	/// new group after the parent's last one
	pub order: Option<u32>,
	/// Language being saved
	pub language: Language,
	/// Section type tag
	pub kind: String,
	/// The edited block (its title becomes the row title)
	pub block: ContentBlock,
}

/// Save request for a whole group at once.
#[derive(Debug, Clone)]
pub struct SaveGroup {
	/// Owning page/solution entity
	pub parent_id: Uuid,
	/// Display position addressing an existing group, or `None` to append
	pub order: Option<u32>,
	/// Section type tag
	pub kind: String,
	/// Per-language blocks; a partially translated group is fine
	pub contents: HashMap<Language, ContentBlock>,
}

/// A stored row together with its re-editable block form.
#[derive(Debug, Clone)]
pub struct EditableSection {
	/// The persisted row
	pub row: SectionRow,
	/// The block parsed back from the row's stored mirror; empty when the
	/// envelope failed to parse
	pub block: ContentBlock,
}

/// One section of a public page, ready for template injection.
#[derive(Debug, Clone)]
pub struct PageSection {
	/// Row id
	pub id: Uuid,
	/// Group id
	pub group_id: Uuid,
	/// Display position
	pub order: u32,
	/// Section title
	pub title: String,
	/// Stored display HTML
	pub html: String,
}

/// The composition engine's service surface.
pub struct ContentService {
	store: Arc<dyn SectionStore>,
	config: RenderConfig,
}

impl ContentService {
	/// Create a service over a store with default render options.
	pub fn new(store: Arc<dyn SectionStore>) -> Self {
		Self {
			store,
			config: RenderConfig::default(),
		}
	}

	/// Replace the render options.
	pub fn with_config(mut self, config: RenderConfig) -> Self {
		self.config = config;
		self
	}

	/// Save one language of a group. Returns the written row.
	pub async fn save_section(&self, input: SaveSection) -> SyncResult<SectionRow> {
		let rows = self
			.save_payloads(
				input.parent_id,
				input.order,
				input.kind,
				vec![(input.language, input.block)],
			)
			.await?;
		rows.into_iter()
			.find(|row| row.language == input.language)
			.ok_or_else(|| SyncError::UnsupportedLanguage(input.language.to_string()))
	}

	/// Save a whole group at once. Returns the full row set now belonging
	/// to the group — updated and freshly inserted rows alike.
	pub async fn save_group(&self, input: SaveGroup) -> SyncResult<Vec<SectionRow>> {
		self.save_payloads(
			input.parent_id,
			input.order,
			input.kind,
			input.contents.into_iter().collect(),
		)
		.await
	}

	/// Read a group for editing: every language row at the position, each
	/// with its mirror parsed back into an editable block.
	///
	/// A row whose envelope fails to parse degrades to an empty block with
	/// a warning — one broken row never takes down the editor.
	pub async fn load_group(&self, parent_id: Uuid, order: u32) -> SyncResult<Vec<EditableSection>> {
		let rows = self.store.rows_by_position(parent_id, order).await?;
		Ok(rows
			.into_iter()
			.map(|row| {
				let block = parse_stored_block(&row);
				EditableSection { row, block }
			})
			.collect())
	}

	/// Read a parent's sections for public display in one language, in
	/// ascending display order.
	pub async fn load_page(&self, parent_id: Uuid, language: Language) -> SyncResult<Vec<PageSection>> {
		let rows = self.store.rows_by_parent(parent_id).await?;
		Ok(rows
			.into_iter()
			.filter(|row| row.language == language)
			.map(|row| {
				let html = match StoredContent::parse(&row.content) {
					Ok(stored) => stored.html,
					Err(error) => {
						tracing::warn!(row_id = %row.id, %error, "stored content failed to parse; serving empty section");
						String::new()
					}
				};
				PageSection {
					id: row.id,
					group_id: row.group_id,
					order: row.order,
					title: row.title,
					html,
				}
			})
			.collect())
	}

	/// Move a whole group to a new display position, atomically. Identity
	/// is the group id, so no language row can be orphaned by the move.
	pub async fn move_group(
		&self,
		parent_id: Uuid,
		group_id: Uuid,
		new_order: u32,
	) -> SyncResult<Vec<SectionRow>> {
		let rows = self.store.rows_in_group(group_id).await?;
		if rows.is_empty() || rows[0].parent_id != parent_id {
			return Err(SyncError::GroupNotFound(group_id));
		}
		self.store.set_group_order(group_id, new_order).await?;
		Ok(self.store.rows_in_group(group_id).await?)
	}

	/// Delete one language row. Group edits never cascade into deletion —
	/// this is the explicit path.
	pub async fn delete_section(&self, id: Uuid) -> SyncResult<()> {
		self.store.delete_row(id).await?;
		Ok(())
	}

	/// Delete a whole group, returning how many rows went away.
	pub async fn delete_group(&self, parent_id: Uuid, group_id: Uuid) -> SyncResult<usize> {
		let rows = self.store.rows_in_group(group_id).await?;
		if rows.is_empty() || rows[0].parent_id != parent_id {
			return Err(SyncError::GroupNotFound(group_id));
		}
		Ok(self.store.delete_group(group_id).await?)
	}

	/// Shared save path: parent check, group resolution, render, reconcile,
	/// commit — all-or-nothing at the single-group level.
	async fn save_payloads(
		&self,
		parent_id: Uuid,
		order: Option<u32>,
		kind: String,
		contents: Vec<(Language, ContentBlock)>,
	) -> SyncResult<Vec<SectionRow>> {
		if !self.store.parent_exists(parent_id).await? {
			return Err(SyncError::ParentNotFound(parent_id));
		}

		let (existing, group_id, order) = self.resolve_group(parent_id, order).await?;

		let mut payloads = Vec::with_capacity(contents.len());
		for (language, block) in contents {
			let stored: StoredContent = render(&block, &self.config).into();
			payloads.push(LocalizedPayload {
				language,
				title: block.title,
				content: stored.to_json_string()?,
			});
		}

		let ctx = GroupContext {
			group_id,
			parent_id,
			order,
			kind,
			now: Utc::now(),
		};
		let changeset = reconcile(&existing, &payloads, &ctx);
		tracing::debug!(
			%group_id,
			inserts = changeset.inserts.len(),
			updates = changeset.updates.len(),
			"committing group save"
		);
		self.store.commit(changeset).await?;
		Ok(self.store.rows_in_group(group_id).await?)
	}

	/// Resolve the addressed group: an explicit position either finds an
	/// existing group (keeping its id) or starts a new one at that
	/// position; no position appends a new group after the parent's last.
	async fn resolve_group(
		&self,
		parent_id: Uuid,
		order: Option<u32>,
	) -> SyncResult<(Vec<SectionRow>, Uuid, u32)> {
		match order {
			Some(order) => {
				let existing = self.store.rows_by_position(parent_id, order).await?;
				let group_id = existing
					.first()
					.map(|row| row.group_id)
					.unwrap_or_else(Uuid::new_v4);
				Ok((existing, group_id, order))
			}
			None => {
				let next = match self.store.max_order(parent_id).await? {
					Some(max) => max + 1,
					None => 0,
				};
				Ok((Vec::new(), Uuid::new_v4(), next))
			}
		}
	}
}

/// Parse a row's stored mirror, degrading to an empty block on failure.
fn parse_stored_block(row: &SectionRow) -> ContentBlock {
	match StoredContent::parse(&row.content) {
		Ok(stored) => stored.json,
		Err(error) => {
			tracing::warn!(row_id = %row.id, %error, "stored content failed to parse; falling back to empty block");
			ContentBlock::empty()
		}
	}
}
