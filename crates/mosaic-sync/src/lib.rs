//! # mosaic-sync
//!
//! The persistence half of the mosaic composition engine: one logical
//! content group is the set of per-language rows sharing a group id, and
//! this crate keeps that set consistent under repeated edits.
//!
//! ## Architecture
//!
//! ```text
//! mosaic-sync
//! ├── language - supported content languages
//! ├── row      - persisted per-language rows and group changesets
//! ├── store    - storage abstraction + bundled in-memory store
//! ├── sync     - pure group reconciliation
//! └── service  - boundary operations the host CRUD layer calls
//! ```
//!
//! The synchronizer is additive/updating only: rows belonging to a group but
//! absent from an incoming payload set are left untouched, and deletion is a
//! separate explicit operation.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod language;
pub mod row;
pub mod service;
pub mod store;
pub mod sync;

/// Synchronizer error types
pub mod error {
	use crate::store::StoreError;
	use mosaic_content::error::ContentError;
	use thiserror::Error;
	use uuid::Uuid;

	/// Errors surfaced by group synchronization and the boundary service
	#[derive(Error, Debug)]
	pub enum SyncError {
		/// The owning page/solution does not exist; fatal for the whole
		/// group operation, nothing is written
		#[error("parent entity not found: {0}")]
		ParentNotFound(Uuid),

		/// No rows exist for the addressed group
		#[error("content group not found: {0}")]
		GroupNotFound(Uuid),

		/// No row with the given id
		#[error("content row not found: {0}")]
		RowNotFound(Uuid),

		/// Language code not recognized
		#[error("unsupported language: {0}")]
		UnsupportedLanguage(String),

		/// Content model or renderer failure
		#[error(transparent)]
		Content(#[from] ContentError),

		/// Storage failure
		#[error(transparent)]
		Store(#[from] StoreError),
	}

	/// Result type for synchronizer operations
	pub type SyncResult<T> = Result<T, SyncError>;
}

// Prelude for convenient imports
pub mod prelude {
	//! Convenient re-exports of commonly used items

	pub use crate::error::{SyncError, SyncResult};
	pub use crate::language::Language;
	pub use crate::row::{GroupChangeset, SectionRow};
	pub use crate::service::{
		ContentService, EditableSection, PageSection, SaveGroup, SaveSection,
	};
	pub use crate::store::{InMemorySectionStore, SectionStore, StoreError, StoreResult};
	pub use crate::sync::{reconcile, GroupContext, LocalizedPayload};
}
