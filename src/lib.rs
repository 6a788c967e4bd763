//! # Mosaic
//!
//! A structured content composition engine for multi-language websites.
//!
//! Editors assemble rich page sections out of heterogeneous content
//! elements — free text, images, tables, lists. Mosaic lays the elements
//! out automatically, renders every section to semantic HTML alongside a
//! lossless JSON mirror used for re-editing, and keeps the per-language
//! rows of one logical section consistent under repeated edits.
//!
//! ## Crates
//!
//! - [`content`] — the pure half: typed elements, layout pass, renderer.
//! - [`sync`] — the persistence half: languages, rows, stores, the group
//!   synchronizer and the boundary service the host CRUD layer calls.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use mosaic::prelude::*;
//! use uuid::Uuid;
//!
//! # async fn example() -> SyncResult<()> {
//! let store = Arc::new(InMemorySectionStore::new());
//! let page_id = Uuid::new_v4();
//! store.register_parent(page_id).await;
//! let service = ContentService::new(store);
//!
//! let block = ContentBlock::new("About Us", LayoutMode::Vertical)
//!     .with_element(ContentElement::text("<p>Founded in 2004.</p>"))
//!     .with_layout(LayoutMode::Vertical);
//!
//! let row = service
//!     .save_section(SaveSection {
//!         parent_id: page_id,
//!         order: None,
//!         language: Language::En,
//!         kind: "about".into(),
//!         block,
//!     })
//!     .await?;
//!
//! let sections = service.load_page(page_id, Language::En).await?;
//! assert_eq!(sections[0].id, row.id);
//! # Ok(())
//! # }
//! ```

pub use mosaic_content as content;
pub use mosaic_sync as sync;

// Prelude for convenient imports
pub mod prelude {
	//! Convenient re-exports of commonly used items from both crates

	pub use mosaic_content::prelude::*;
	pub use mosaic_sync::prelude::*;
}
