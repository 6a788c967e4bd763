//! Content blocks
//!
//! A content block is one titled, laid-out collection of elements in one
//! language. Blocks are plain values: every editing operation returns a new
//! block and leaves the receiver untouched, so the same block can back
//! several language tabs in an editor without aliasing surprises.

use crate::element::{ContentElement, ElementContent, Margins, Position, Width};
use crate::error::{ContentError, ContentResult};
use crate::layout::{arrange, LayoutMode};
use serde::{Deserialize, Serialize};

/// A titled, laid-out, ordered list of content elements.
///
/// Element order is significant: it is both the vertical stacking order and
/// the slot-assignment order of the layout pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
	/// Section title; rendered as a heading when non-empty
	#[serde(default)]
	pub title: String,
	/// Layout mode driving the automatic positioning pass
	#[serde(default)]
	pub layout: LayoutMode,
	/// Elements, in display order
	#[serde(default)]
	pub elements: Vec<ContentElement>,
}

impl ContentBlock {
	/// Create an empty block with the given title and layout mode.
	pub fn new(title: impl Into<String>, layout: LayoutMode) -> Self {
		Self {
			title: title.into(),
			layout,
			elements: Vec::new(),
		}
	}

	/// An untitled empty vertical block — the read-path fallback for
	/// content that failed to parse.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Look up an element by id.
	pub fn element(&self, id: &str) -> Option<&ContentElement> {
		self.elements.iter().find(|element| element.id == id)
	}

	/// Return a new block with `element` appended.
	///
	/// In grid mode the layout pass re-runs, since grid slot sizing depends
	/// on element count.
	pub fn with_element(&self, element: ContentElement) -> ContentBlock {
		let mut next = self.clone();
		next.elements.push(element);
		next.rearrange_if_grid();
		next
	}

	/// Return a new block without the element carrying `id`. Unknown ids
	/// are a no-op.
	pub fn without_element(&self, id: &str) -> ContentBlock {
		let mut next = self.clone();
		next.elements.retain(|element| element.id != id);
		next.rearrange_if_grid();
		next
	}

	/// Return a new block with the layout mode recorded and the automatic
	/// layout pass applied to every element.
	pub fn with_layout(&self, layout: LayoutMode) -> ContentBlock {
		ContentBlock {
			title: self.title.clone(),
			layout,
			elements: arrange(layout, &self.elements),
		}
	}

	/// Return a new block with `patch` merged into the element carrying
	/// `id`.
	///
	/// An unknown id is a no-op (the block comes back unchanged); a patch
	/// that replaces the payload with a different variant is rejected, as is
	/// a table payload violating the row/column invariants.
	pub fn patch_element(&self, id: &str, patch: &ElementPatch) -> ContentResult<ContentBlock> {
		let mut next = self.clone();
		for element in &mut next.elements {
			if element.id == id {
				patch.apply_to(element)?;
				break;
			}
		}
		Ok(next)
	}

	fn rearrange_if_grid(&mut self) {
		if self.layout == LayoutMode::Grid {
			self.elements = arrange(LayoutMode::Grid, &self.elements);
		}
	}
}

/// Field-level partial update for a single element.
///
/// Every field is optional; set fields replace the element's, unset fields
/// leave it alone. `style` merges field-wise the same way.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElementPatch {
	/// Replacement payload; must keep the element's variant
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub content: Option<ElementContent>,
	/// New horizontal slot
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub position: Option<Position>,
	/// New width hint
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub width: Option<Width>,
	/// New top margin
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub margin_top: Option<u32>,
	/// New right margin
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub margin_right: Option<u32>,
	/// New bottom margin
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub margin_bottom: Option<u32>,
	/// New left margin
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub margin_left: Option<u32>,
	/// New padding
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub padding: Option<u32>,
	/// Style knobs to merge in (`Some` fields win)
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub style: Option<crate::element::ElementStyle>,
}

impl ElementPatch {
	/// A patch that only replaces the payload.
	pub fn content(content: ElementContent) -> Self {
		Self {
			content: Some(content),
			..Self::default()
		}
	}

	fn apply_to(&self, element: &mut ContentElement) -> ContentResult<()> {
		if let Some(content) = &self.content {
			if content.kind() != element.kind() {
				return Err(ContentError::ElementTypeImmutable {
					id: element.id.clone(),
				});
			}
			if let ElementContent::Table(table) = content {
				table.validate()?;
			}
			element.content = content.clone();
		}
		if let Some(position) = self.position {
			element.position = position;
		}
		if let Some(width) = self.width {
			element.width = width;
		}
		element.margin = Margins {
			top: self.margin_top.unwrap_or(element.margin.top),
			right: self.margin_right.unwrap_or(element.margin.right),
			bottom: self.margin_bottom.unwrap_or(element.margin.bottom),
			left: self.margin_left.unwrap_or(element.margin.left),
		};
		if let Some(padding) = self.padding {
			element.padding = padding;
		}
		if let Some(style) = &self.style {
			element.style = element.style.merged(style);
		}
		Ok(())
	}
}
