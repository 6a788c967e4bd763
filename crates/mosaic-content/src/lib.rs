//! # mosaic-content
//!
//! The content half of the mosaic composition engine: a typed model for the
//! elements a page section is built from, the automatic layout pass that
//! positions them, and the renderer that turns a section into semantic HTML
//! alongside a lossless JSON mirror used for re-editing.
//!
//! ## Architecture
//!
//! ```text
//! mosaic-content
//! ├── element  - tagged content units (text/image/table/list) and patches
//! ├── block    - a titled, laid-out list of elements (copy-on-write edits)
//! ├── layout   - automatic position/width/margin assignment per layout mode
//! └── render   - HTML + JSON dual output, stored envelope
//! ```
//!
//! Everything in this crate is pure and synchronous; persistence and
//! language handling live in `mosaic-sync`.
//!
//! ## Quick Start
//!
//! ```
//! use mosaic_content::prelude::*;
//!
//! let block = ContentBlock::new("Our Mission", LayoutMode::Horizontal)
//!     .with_element(ContentElement::text("<p>We build things.</p>"))
//!     .with_element(ContentElement::image("uploads/team.jpg"))
//!     .with_layout(LayoutMode::Horizontal);
//!
//! let rendered = render(&block, &RenderConfig::default());
//! assert!(rendered.html.contains("<img"));
//! assert_eq!(rendered.json, block);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod block;
pub mod element;
pub mod layout;
pub mod render;

/// Content model error types
pub mod error {
	use thiserror::Error;

	/// Errors produced by the content model and renderer
	#[derive(Error, Debug)]
	pub enum ContentError {
		/// Table or list payload violates a structural invariant
		#[error("invalid element payload: {0}")]
		InvalidElementPayload(String),

		/// A patch tried to replace an element's payload with a different variant
		#[error("element {id} cannot change type after creation")]
		ElementTypeImmutable {
			/// Id of the element the patch targeted
			id: String,
		},

		/// Layout mode string not recognized
		#[error("unsupported layout mode: {0}")]
		UnsupportedLayout(String),

		/// Element type string not recognized
		#[error("unsupported element type: {0}")]
		UnsupportedElementType(String),

		/// A stored content envelope failed to parse
		#[error("malformed stored content: {0}")]
		MalformedStoredContent(#[from] serde_json::Error),
	}

	/// Result type for content operations
	pub type ContentResult<T> = Result<T, ContentError>;
}

// Prelude for convenient imports
pub mod prelude {
	//! Convenient re-exports of commonly used items

	pub use crate::block::{ContentBlock, ElementPatch};
	pub use crate::element::{
		CellAlign, ColumnStyle, ContentElement, ElementContent, ElementKind, ElementStyle,
		ImageAlign, ImageFloat, ListData, ListKind, Margins, Position, TableData, Width,
	};
	pub use crate::error::{ContentError, ContentResult};
	pub use crate::layout::{arrange, LayoutMode};
	pub use crate::render::{render, RenderConfig, RenderedBlock, StoredContent};
}
