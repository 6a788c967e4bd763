//! Content element model
//!
//! A content element is one visual unit inside a content block: an opaque
//! rich-text fragment, an image, a table or a list, carrying the positioning
//! attributes the layout pass assigns and the optional per-type styling an
//! editor can tweak by hand.

use crate::error::{ContentError, ContentResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Horizontal slot an element occupies inside its block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
	/// Left column of a two-column pair
	Left,
	/// Right column of a two-column pair
	Right,
	/// Spans the whole block width
	Full,
	/// Centered single slot
	Center,
}

impl Position {
	/// Lowercase identifier, matching the serialized form.
	pub fn as_str(&self) -> &'static str {
		match self {
			Position::Left => "left",
			Position::Right => "right",
			Position::Full => "full",
			Position::Center => "center",
		}
	}
}

/// Element width as a percentage of the block width.
///
/// The set of values is closed; widths are serialized as their CSS
/// percentage literal so the JSON mirror is self-describing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Width {
	/// 25%
	#[serde(rename = "25%")]
	Quarter,
	/// 33%
	#[serde(rename = "33%")]
	Third,
	/// 50%
	#[serde(rename = "50%")]
	Half,
	/// 66%
	#[serde(rename = "66%")]
	TwoThirds,
	/// 75%
	#[serde(rename = "75%")]
	ThreeQuarters,
	/// 100%
	#[serde(rename = "100%")]
	Full,
}

impl Width {
	/// CSS percentage literal for this width.
	pub fn as_css(&self) -> &'static str {
		match self {
			Width::Quarter => "25%",
			Width::Third => "33%",
			Width::Half => "50%",
			Width::TwoThirds => "66%",
			Width::ThreeQuarters => "75%",
			Width::Full => "100%",
		}
	}
}

/// Pixel margins around an element. All sides default to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
	/// Top margin in pixels
	#[serde(default)]
	pub top: u32,
	/// Right margin in pixels
	#[serde(default)]
	pub right: u32,
	/// Bottom margin in pixels
	#[serde(default)]
	pub bottom: u32,
	/// Left margin in pixels
	#[serde(default)]
	pub left: u32,
}

impl Margins {
	/// True when every side is 0.
	pub fn is_zero(&self) -> bool {
		self.top == 0 && self.right == 0 && self.bottom == 0 && self.left == 0
	}
}

/// Horizontal alignment of a table column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellAlign {
	/// Left-aligned (default)
	#[default]
	Left,
	/// Centered
	Center,
	/// Right-aligned
	Right,
}

impl CellAlign {
	/// CSS `text-align` value.
	pub fn as_css(&self) -> &'static str {
		match self {
			CellAlign::Left => "left",
			CellAlign::Center => "center",
			CellAlign::Right => "right",
		}
	}
}

/// Per-column presentation record of a table element.
///
/// `styles` on [`TableData`] always has one of these per header; growing the
/// header list pads with the default record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnStyle {
	/// Cell text alignment for the whole column
	#[serde(default)]
	pub align: CellAlign,
	/// Explicit CSS width for the column, e.g. `"120px"` or `"20%"`
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub width: Option<String>,
	/// Header cell background color
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub background: Option<String>,
}

/// Payload of a table element.
///
/// Invariants: every row has exactly `headers.len()` cells and `styles` has
/// exactly one record per header. The mutating operations below preserve
/// both; [`TableData::validate`] re-checks them on payloads coming in from
/// the outside.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableData {
	/// Ordered column headers
	pub headers: Vec<String>,
	/// Body rows, each as long as `headers`
	#[serde(default)]
	pub rows: Vec<Vec<String>>,
	/// One style record per column
	#[serde(default)]
	pub styles: Vec<ColumnStyle>,
}

impl TableData {
	/// Create a table with the given headers, no body rows, and default
	/// column styles.
	pub fn with_headers<I, S>(headers: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
		let styles = vec![ColumnStyle::default(); headers.len()];
		Self {
			headers,
			rows: Vec::new(),
			styles,
		}
	}

	/// Number of columns.
	pub fn column_count(&self) -> usize {
		self.headers.len()
	}

	/// Append a column: header, default style, one empty cell per row.
	pub fn add_column(&mut self, header: impl Into<String>) {
		self.headers.push(header.into());
		self.styles.push(ColumnStyle::default());
		for row in &mut self.rows {
			row.push(String::new());
		}
	}

	/// Remove the column at `index` together with its style record and the
	/// matching cell of every row.
	///
	/// Rejected when it would leave the table without columns.
	pub fn remove_column(&mut self, index: usize) -> ContentResult<()> {
		if self.headers.len() <= 1 {
			return Err(ContentError::InvalidElementPayload(
				"a table must keep at least one column".into(),
			));
		}
		if index >= self.headers.len() {
			return Err(ContentError::InvalidElementPayload(format!(
				"column index {index} out of bounds ({} columns)",
				self.headers.len()
			)));
		}
		self.headers.remove(index);
		self.styles.remove(index);
		for row in &mut self.rows {
			row.remove(index);
		}
		Ok(())
	}

	/// Append an empty row sized to the current header count.
	pub fn add_row(&mut self) {
		self.rows.push(vec![String::new(); self.headers.len()]);
	}

	/// Remove the row at `index`. A table keeps at least one row once it has
	/// any.
	pub fn remove_row(&mut self, index: usize) -> ContentResult<()> {
		if self.rows.len() <= 1 {
			return Err(ContentError::InvalidElementPayload(
				"a table must keep at least one row".into(),
			));
		}
		if index >= self.rows.len() {
			return Err(ContentError::InvalidElementPayload(format!(
				"row index {index} out of bounds ({} rows)",
				self.rows.len()
			)));
		}
		self.rows.remove(index);
		Ok(())
	}

	/// Set one body cell.
	pub fn set_cell(&mut self, row: usize, column: usize, value: impl Into<String>) -> ContentResult<()> {
		let cell = self
			.rows
			.get_mut(row)
			.and_then(|r| r.get_mut(column))
			.ok_or_else(|| {
				ContentError::InvalidElementPayload(format!(
					"cell ({row}, {column}) out of bounds"
				))
			})?;
		*cell = value.into();
		Ok(())
	}

	/// Rename one column header.
	pub fn set_header(&mut self, column: usize, value: impl Into<String>) -> ContentResult<()> {
		let header = self.headers.get_mut(column).ok_or_else(|| {
			ContentError::InvalidElementPayload(format!("column index {column} out of bounds"))
		})?;
		*header = value.into();
		Ok(())
	}

	/// Check the structural invariants, padding `styles` up to the header
	/// count first (headers may have grown on a payload assembled outside
	/// this module).
	pub fn normalize(&mut self) -> ContentResult<()> {
		while self.styles.len() < self.headers.len() {
			self.styles.push(ColumnStyle::default());
		}
		self.styles.truncate(self.headers.len());
		self.validate()
	}

	/// Check the structural invariants without repairing anything.
	pub fn validate(&self) -> ContentResult<()> {
		for (i, row) in self.rows.iter().enumerate() {
			if row.len() != self.headers.len() {
				return Err(ContentError::InvalidElementPayload(format!(
					"row {i} has {} cells, expected {}",
					row.len(),
					self.headers.len()
				)));
			}
		}
		if self.styles.len() != self.headers.len() {
			return Err(ContentError::InvalidElementPayload(format!(
				"{} column styles for {} headers",
				self.styles.len(),
				self.headers.len()
			)));
		}
		Ok(())
	}
}

/// Ordered or unordered list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
	/// Numbered list, rendered as `<ol>`
	Ordered,
	/// Bulleted list, rendered as `<ul>` (default)
	#[default]
	Unordered,
}

/// Payload of a list element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListData {
	/// List items, in display order
	pub items: Vec<String>,
	/// Ordered or unordered
	#[serde(default)]
	pub kind: ListKind,
}

impl ListData {
	/// Create a list of the given kind with the given items.
	pub fn new<I, S>(kind: ListKind, items: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			items: items.into_iter().map(Into::into).collect(),
			kind,
		}
	}

	/// Append an item.
	pub fn add_item(&mut self, item: impl Into<String>) {
		self.items.push(item.into());
	}

	/// Remove the item at `index`.
	pub fn remove_item(&mut self, index: usize) -> ContentResult<()> {
		if index >= self.items.len() {
			return Err(ContentError::InvalidElementPayload(format!(
				"list index {index} out of bounds ({} items)",
				self.items.len()
			)));
		}
		self.items.remove(index);
		Ok(())
	}
}

/// Payload of a content element.
///
/// The variant is the element's type and is fixed at construction; a patch
/// that replaces the payload with a different variant is rejected with
/// [`ContentError::ElementTypeImmutable`]. Changing an element's meaning
/// requires deleting it and creating a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ElementContent {
	/// Opaque HTML fragment produced by the external rich-text editor;
	/// passed through verbatim at render time
	Text(String),
	/// Image URL, absolute or relative to the configured asset base
	Image(String),
	/// Tabular data with per-column styling
	Table(TableData),
	/// Ordered or unordered list
	List(ListData),
}

impl ElementContent {
	/// The element type this payload belongs to.
	pub fn kind(&self) -> ElementKind {
		match self {
			ElementContent::Text(_) => ElementKind::Text,
			ElementContent::Image(_) => ElementKind::Image,
			ElementContent::Table(_) => ElementKind::Table,
			ElementContent::List(_) => ElementKind::List,
		}
	}

	/// True when there is nothing to display yet: blank fragment or URL, a
	/// table without headers, a list without items.
	pub fn is_empty(&self) -> bool {
		match self {
			ElementContent::Text(fragment) => fragment.trim().is_empty(),
			ElementContent::Image(url) => url.trim().is_empty(),
			ElementContent::Table(table) => table.headers.is_empty(),
			ElementContent::List(list) => list.items.is_empty(),
		}
	}
}

/// Discriminant of [`ElementContent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
	/// Rich-text fragment
	Text,
	/// Image
	Image,
	/// Table
	Table,
	/// List
	List,
}

impl ElementKind {
	/// Lowercase identifier, matching the serialized form.
	pub fn as_str(&self) -> &'static str {
		match self {
			ElementKind::Text => "text",
			ElementKind::Image => "image",
			ElementKind::Table => "table",
			ElementKind::List => "list",
		}
	}
}

impl fmt::Display for ElementKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ElementKind {
	type Err = ContentError;

	fn from_str(s: &str) -> ContentResult<Self> {
		match s {
			"text" => Ok(ElementKind::Text),
			"image" => Ok(ElementKind::Image),
			"table" => Ok(ElementKind::Table),
			"list" => Ok(ElementKind::List),
			other => Err(ContentError::UnsupportedElementType(other.to_string())),
		}
	}
}

/// Alignment of an image inside its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageAlign {
	/// Flush left
	Left,
	/// Centered
	Center,
	/// Flush right
	Right,
}

/// CSS float applied to an image so text wraps around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFloat {
	/// Float left
	Left,
	/// Float right
	Right,
}

/// Optional per-type presentation knobs of an element.
///
/// Text elements read `line_height`/`font_weight`, image elements the
/// `image_*` group, and every element the box-level border/background
/// fields. Untouched knobs stay `None` and are omitted from the JSON mirror.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementStyle {
	/// Line height multiplier for text fragments
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub line_height: Option<f32>,
	/// CSS font weight for text fragments, e.g. `"600"` or `"bold"`
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub font_weight: Option<String>,
	/// Image width as a percentage of its slot
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub image_width_percent: Option<u8>,
	/// Maximum image height in pixels
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub image_max_height_px: Option<u32>,
	/// Image alignment inside its slot
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub image_align: Option<ImageAlign>,
	/// Image float, for text wrap-around
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub image_float: Option<ImageFloat>,
	/// Border width in pixels; a border is drawn only when this is set
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub border_width: Option<u32>,
	/// Border color, any CSS color literal
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub border_color: Option<String>,
	/// Border radius in pixels
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub border_radius: Option<u32>,
	/// Background color of the element box
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub background_color: Option<String>,
}

impl ElementStyle {
	/// True when no knob is set.
	pub fn is_empty(&self) -> bool {
		*self == ElementStyle::default()
	}

	/// Field-wise merge: `Some` values of `patch` win over `self`.
	pub fn merged(&self, patch: &ElementStyle) -> ElementStyle {
		ElementStyle {
			line_height: patch.line_height.or(self.line_height),
			font_weight: patch.font_weight.clone().or_else(|| self.font_weight.clone()),
			image_width_percent: patch.image_width_percent.or(self.image_width_percent),
			image_max_height_px: patch.image_max_height_px.or(self.image_max_height_px),
			image_align: patch.image_align.or(self.image_align),
			image_float: patch.image_float.or(self.image_float),
			border_width: patch.border_width.or(self.border_width),
			border_color: patch.border_color.clone().or_else(|| self.border_color.clone()),
			border_radius: patch.border_radius.or(self.border_radius),
			background_color: patch
				.background_color
				.clone()
				.or_else(|| self.background_color.clone()),
		}
	}
}

/// One visual unit inside a content block.
///
/// Elements get a fresh unique id at construction; the id is the key edits
/// and moves reconcile against and never changes for the element's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentElement {
	/// Stable unique id, assigned at creation
	pub id: String,
	/// Typed payload; the variant doubles as the element type
	pub content: ElementContent,
	/// Horizontal slot, normally assigned by the layout pass
	pub position: Position,
	/// Width hint, normally assigned by the layout pass
	pub width: Width,
	/// Pixel margins
	#[serde(default)]
	pub margin: Margins,
	/// Inner padding in pixels
	#[serde(default)]
	pub padding: u32,
	/// Optional presentation knobs
	#[serde(default, skip_serializing_if = "ElementStyle::is_empty")]
	pub style: ElementStyle,
}

impl ContentElement {
	/// Create an element from a payload, with a fresh id and every
	/// positioning attribute at its default.
	pub fn new(content: ElementContent) -> Self {
		Self {
			id: Uuid::new_v4().to_string(),
			content,
			position: Position::Full,
			width: Width::Full,
			margin: Margins::default(),
			padding: 0,
			style: ElementStyle::default(),
		}
	}

	/// Text element from an opaque HTML fragment.
	pub fn text(fragment: impl Into<String>) -> Self {
		Self::new(ElementContent::Text(fragment.into()))
	}

	/// Image element from a URL.
	pub fn image(url: impl Into<String>) -> Self {
		Self::new(ElementContent::Image(url.into()))
	}

	/// Table element.
	pub fn table(table: TableData) -> Self {
		Self::new(ElementContent::Table(table))
	}

	/// List element.
	pub fn list(list: ListData) -> Self {
		Self::new(ElementContent::List(list))
	}

	/// The element's type.
	pub fn kind(&self) -> ElementKind {
		self.content.kind()
	}
}
