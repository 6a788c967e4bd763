//! Group reconciliation
//!
//! [`reconcile`] is the heart of the synchronizer: given the rows currently
//! belonging to a group and the per-language payloads of a save, it decides
//! which rows to update in place and which to create. It is a pure function
//! over its inputs — storage happens afterwards, when the resulting
//! changeset is committed in one transaction.

use crate::language::Language;
use crate::row::{GroupChangeset, SectionRow};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use uuid::Uuid;

/// One language's rendered payload submitted for a group save.
#[derive(Debug, Clone)]
pub struct LocalizedPayload {
	/// Language this payload is for
	pub language: Language,
	/// Section title in that language
	pub title: String,
	/// JSON-encoded stored envelope (`{html, json}`)
	pub content: String,
}

/// Identity and placement shared by every row written in one group save.
#[derive(Debug, Clone)]
pub struct GroupContext {
	/// Immutable group id (existing, or freshly minted on creation)
	pub group_id: Uuid,
	/// Owning entity
	pub parent_id: Uuid,
	/// Display position of the group
	pub order: u32,
	/// Section type tag
	pub kind: String,
	/// Save timestamp stamped on every written row
	pub now: DateTime<Utc>,
}

/// Reconcile incoming payloads against a group's existing rows.
///
/// Per incoming language: an existing row for that language is updated in
/// place — same row id, same creation time, new title/content/kind — so
/// external references to the row id survive the save. A language without a
/// row gets a fresh insert under the group's id and order. Existing rows
/// for languages absent from the payload set are left untouched; the
/// synchronizer never deletes.
///
/// Duplicate payloads for one language collapse to the last one submitted.
/// Output rows follow the canonical language order, so the changeset is
/// deterministic for a given input.
pub fn reconcile(
	existing: &[SectionRow],
	incoming: &[LocalizedPayload],
	ctx: &GroupContext,
) -> GroupChangeset {
	let by_language: HashMap<Language, &SectionRow> =
		existing.iter().map(|row| (row.language, row)).collect();
	let mut payloads: HashMap<Language, &LocalizedPayload> = HashMap::new();
	for payload in incoming {
		payloads.insert(payload.language, payload);
	}

	let mut changeset = GroupChangeset::default();
	for language in Language::ALL {
		let Some(payload) = payloads.get(&language) else {
			continue;
		};
		match by_language.get(&language) {
			Some(row) => {
				let mut updated = (*row).clone();
				updated.title = payload.title.clone();
				updated.content = payload.content.clone();
				updated.kind = ctx.kind.clone();
				updated.updated_at = ctx.now;
				changeset.updates.push(updated);
			}
			None => {
				changeset.inserts.push(SectionRow {
					id: Uuid::new_v4(),
					group_id: ctx.group_id,
					parent_id: ctx.parent_id,
					language,
					title: payload.title.clone(),
					content: payload.content.clone(),
					kind: ctx.kind.clone(),
					order: ctx.order,
					created_at: ctx.now,
					updated_at: ctx.now,
				});
			}
		}
	}
	changeset
}

#[cfg(test)]
mod tests {
	use super::*;

	fn row(language: Language, ctx: &GroupContext) -> SectionRow {
		SectionRow {
			id: Uuid::new_v4(),
			group_id: ctx.group_id,
			parent_id: ctx.parent_id,
			language,
			title: "old".into(),
			content: "{}".into(),
			kind: ctx.kind.clone(),
			order: ctx.order,
			created_at: ctx.now,
			updated_at: ctx.now,
		}
	}

	fn payload(language: Language, title: &str) -> LocalizedPayload {
		LocalizedPayload {
			language,
			title: title.into(),
			content: "{\"html\":\"\",\"json\":{}}".into(),
		}
	}

	fn ctx() -> GroupContext {
		GroupContext {
			group_id: Uuid::new_v4(),
			parent_id: Uuid::new_v4(),
			order: 2,
			kind: "about".into(),
			now: Utc::now(),
		}
	}

	#[test]
	fn existing_languages_update_in_place_new_ones_insert() {
		let ctx = ctx();
		let tr = row(Language::Tr, &ctx);
		let en = row(Language::En, &ctx);

		let changeset = reconcile(
			&[tr.clone(), en.clone()],
			&[
				payload(Language::Tr, "tr yeni"),
				payload(Language::En, "en new"),
				payload(Language::De, "de neu"),
			],
			&ctx,
		);

		assert_eq!(changeset.updates.len(), 2);
		assert_eq!(changeset.inserts.len(), 1);
		let updated_ids: Vec<_> = changeset.updates.iter().map(|r| r.id).collect();
		assert!(updated_ids.contains(&tr.id));
		assert!(updated_ids.contains(&en.id));
		assert_eq!(changeset.inserts[0].language, Language::De);
		assert_eq!(changeset.inserts[0].order, ctx.order);
	}

	#[test]
	fn absent_languages_are_left_untouched() {
		let ctx = ctx();
		let fr = row(Language::Fr, &ctx);

		let changeset = reconcile(&[fr], &[payload(Language::Tr, "tr")], &ctx);

		assert_eq!(changeset.updates.len(), 0);
		assert_eq!(changeset.inserts.len(), 1);
	}

	#[test]
	fn duplicate_payloads_collapse_to_the_last_one() {
		let ctx = ctx();

		let changeset = reconcile(
			&[],
			&[payload(Language::En, "first"), payload(Language::En, "second")],
			&ctx,
		);

		assert_eq!(changeset.len(), 1);
		assert_eq!(changeset.inserts[0].title, "second");
	}
}
