//! Dual-format rendering
//!
//! [`render`] turns a content block into two artifacts derived from the same
//! input: a semantic HTML string for display and a lossless JSON mirror for
//! re-editing. The two are always regenerated together — the mirror is
//! authoritative for editing, the HTML for display, and neither is ever
//! patched independently of the other.
//!
//! Per-element rendering is split into pure functions per element type;
//! the block renderer only assembles wrappers around their output.

use crate::block::ContentBlock;
use crate::element::{
	ContentElement, ElementContent, ImageAlign, ImageFloat, ListData, ListKind, TableData,
};
use crate::error::ContentResult;
use crate::layout::LayoutMode;
use serde::{Deserialize, Serialize};

/// Options for block rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
	/// Base URL relative image paths are resolved against
	pub asset_base_url: String,
	/// Visible placeholder text for empty element payloads
	pub placeholder: String,
	/// Prefix of every emitted CSS class
	pub class_prefix: String,
}

impl Default for RenderConfig {
	fn default() -> Self {
		Self {
			asset_base_url: String::new(),
			placeholder: "Content coming soon".to_string(),
			class_prefix: "mosaic".to_string(),
		}
	}
}

impl RenderConfig {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the asset base URL.
	pub fn asset_base_url(mut self, base: impl Into<String>) -> Self {
		self.asset_base_url = base.into();
		self
	}

	/// Sets the placeholder text.
	pub fn placeholder(mut self, text: impl Into<String>) -> Self {
		self.placeholder = text.into();
		self
	}

	/// Sets the CSS class prefix.
	pub fn class_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.class_prefix = prefix.into();
		self
	}
}

/// Output of [`render`]: the display HTML and the editing mirror.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedBlock {
	/// Display-ready HTML
	pub html: String,
	/// Lossless mirror of the input block
	pub json: ContentBlock,
}

/// Persisted envelope: what the `content` column of a language row holds,
/// JSON-encoded. Display consumers read `html`, editing consumers read
/// `json`; this shape is the one bit-exact storage contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredContent {
	/// Display-ready HTML
	pub html: String,
	/// Lossless mirror of the block
	pub json: ContentBlock,
}

impl StoredContent {
	/// Encode the envelope for storage.
	pub fn to_json_string(&self) -> ContentResult<String> {
		Ok(serde_json::to_string(self)?)
	}

	/// Parse a stored envelope.
	///
	/// Failures surface as [`MalformedStoredContent`]; graceful fallback is
	/// the read path's business, not this parser's.
	///
	/// [`MalformedStoredContent`]: crate::error::ContentError::MalformedStoredContent
	pub fn parse(raw: &str) -> ContentResult<StoredContent> {
		Ok(serde_json::from_str(raw)?)
	}
}

impl From<RenderedBlock> for StoredContent {
	fn from(rendered: RenderedBlock) -> Self {
		Self {
			html: rendered.html,
			json: rendered.json,
		}
	}
}

/// Render a block into its HTML and JSON forms.
///
/// Pure: same block and config always produce the same output. The mirror is
/// a field-for-field copy of the input, so `parse(render(b).json) == b`.
pub fn render(block: &ContentBlock, config: &RenderConfig) -> RenderedBlock {
	let p = &config.class_prefix;
	let mut html = String::new();
	html.push_str(&format!(
		"<section class=\"{p}-block {p}-block--{}\">",
		block.layout.as_str()
	));
	if !block.title.trim().is_empty() {
		html.push_str(&format!(
			"<h2 class=\"{p}-block__title\">{}</h2>",
			escape_html(&block.title)
		));
	}
	html.push_str(&layout_wrapper_open(block.layout, p));
	for element in &block.elements {
		html.push_str(&render_element(element, block.layout, config));
	}
	html.push_str("</div></section>");

	RenderedBlock {
		html,
		json: block.clone(),
	}
}

fn layout_wrapper_open(layout: LayoutMode, prefix: &str) -> String {
	match layout {
		LayoutMode::Vertical => {
			format!("<div class=\"{prefix}-block__stack\">")
		}
		LayoutMode::Horizontal => format!(
			"<div class=\"{prefix}-block__row\" style=\"display:flex;flex-wrap:wrap;align-items:flex-start\">"
		),
		// The grid container decides the column count at render time; the
		// per-element width assigned in grid mode is informational.
		LayoutMode::Grid => format!(
			"<div class=\"{prefix}-block__grid\" style=\"display:grid;grid-template-columns:repeat(auto-fit,minmax(240px,1fr));gap:20px\">"
		),
	}
}

/// Render one element: a wrapper div carrying the box styling plus the
/// type-specific body.
fn render_element(element: &ContentElement, layout: LayoutMode, config: &RenderConfig) -> String {
	let p = &config.class_prefix;
	let body = if element.content.is_empty() {
		placeholder(config)
	} else {
		match &element.content {
			ElementContent::Text(fragment) => render_text(fragment, element, p),
			ElementContent::Image(url) => render_image(url, element, config),
			ElementContent::Table(table) => render_table(table, p),
			ElementContent::List(list) => render_list(list, p),
		}
	};

	let style = element_box_style(element, layout);
	let style_attr = if style.is_empty() {
		String::new()
	} else {
		format!(" style=\"{}\"", escape_attr(&style))
	};
	format!(
		"<div class=\"{p}-element {p}-element--{} {p}-element--{}\"{style_attr}>{body}</div>",
		element.kind().as_str(),
		element.position.as_str(),
	)
}

/// Inline style of the element wrapper: margins, padding, border and
/// background, plus the width hint the layout mode calls for.
fn element_box_style(element: &ContentElement, layout: LayoutMode) -> String {
	let mut parts: Vec<String> = Vec::new();
	if !element.margin.is_zero() {
		parts.push(format!(
			"margin:{}px {}px {}px {}px",
			element.margin.top, element.margin.right, element.margin.bottom, element.margin.left
		));
	}
	if element.padding > 0 {
		parts.push(format!("padding:{}px", element.padding));
	}
	match layout {
		// Width becomes a flex-basis/min-width hint inside the flex row.
		LayoutMode::Horizontal => {
			parts.push(format!("flex-basis:{}", element.width.as_css()));
			parts.push("min-width:240px".to_string());
		}
		LayoutMode::Vertical => parts.push(format!("width:{}", element.width.as_css())),
		LayoutMode::Grid => {}
	}
	if let Some(width) = element.style.border_width {
		let color = element.style.border_color.as_deref().unwrap_or("#000");
		parts.push(format!("border:{width}px solid {color}"));
	}
	if let Some(radius) = element.style.border_radius {
		parts.push(format!("border-radius:{radius}px"));
	}
	if let Some(background) = &element.style.background_color {
		parts.push(format!("background-color:{background}"));
	}
	parts.join(";")
}

/// The opaque fragment goes through verbatim; only the container is styled.
fn render_text(fragment: &str, element: &ContentElement, prefix: &str) -> String {
	let mut style = String::new();
	if let Some(line_height) = element.style.line_height {
		style.push_str(&format!("line-height:{line_height}"));
	}
	if let Some(font_weight) = &element.style.font_weight {
		if !style.is_empty() {
			style.push(';');
		}
		style.push_str(&format!("font-weight:{font_weight}"));
	}
	if style.is_empty() {
		format!("<div class=\"{prefix}-text\">{fragment}</div>")
	} else {
		format!(
			"<div class=\"{prefix}-text\" style=\"{}\">{fragment}</div>",
			escape_attr(&style)
		)
	}
}

fn render_image(url: &str, element: &ContentElement, config: &RenderConfig) -> String {
	let resolved = resolve_asset_url(url, &config.asset_base_url);
	let mut style = String::new();
	if let Some(percent) = element.style.image_width_percent {
		style.push_str(&format!("width:{percent}%;"));
	}
	if let Some(max_height) = element.style.image_max_height_px {
		style.push_str(&format!("max-height:{max_height}px;"));
	}
	match element.style.image_align {
		Some(ImageAlign::Center) => style.push_str("display:block;margin-left:auto;margin-right:auto;"),
		Some(ImageAlign::Left) => style.push_str("display:block;margin-right:auto;"),
		Some(ImageAlign::Right) => style.push_str("display:block;margin-left:auto;"),
		None => {}
	}
	match element.style.image_float {
		Some(ImageFloat::Left) => style.push_str("float:left;"),
		Some(ImageFloat::Right) => style.push_str("float:right;"),
		None => {}
	}
	let style_attr = if style.is_empty() {
		String::new()
	} else {
		format!(" style=\"{}\"", escape_attr(style.trim_end_matches(';')))
	};
	format!(
		"<img class=\"{}-image\" src=\"{}\" alt=\"\"{style_attr}>",
		config.class_prefix,
		escape_attr(&resolved)
	)
}

fn render_table(table: &TableData, prefix: &str) -> String {
	let mut html = format!("<table class=\"{prefix}-table\"><thead><tr>");
	for (i, header) in table.headers.iter().enumerate() {
		let style = table.styles.get(i);
		let mut css = String::new();
		if let Some(style) = style {
			css.push_str(&format!("text-align:{}", style.align.as_css()));
			if let Some(width) = &style.width {
				css.push_str(&format!(";width:{width}"));
			}
			if let Some(background) = &style.background {
				css.push_str(&format!(";background-color:{background}"));
			}
		}
		if css.is_empty() {
			html.push_str(&format!("<th>{}</th>", escape_html(header)));
		} else {
			html.push_str(&format!(
				"<th style=\"{}\">{}</th>",
				escape_attr(&css),
				escape_html(header)
			));
		}
	}
	html.push_str("</tr></thead><tbody>");
	for row in &table.rows {
		html.push_str("<tr>");
		for (i, cell) in row.iter().enumerate() {
			let align = table.styles.get(i).map(|style| style.align).unwrap_or_default();
			html.push_str(&format!(
				"<td style=\"text-align:{}\">{}</td>",
				align.as_css(),
				escape_html(cell)
			));
		}
		html.push_str("</tr>");
	}
	html.push_str("</tbody></table>");
	html
}

fn render_list(list: &ListData, prefix: &str) -> String {
	let tag = match list.kind {
		ListKind::Ordered => "ol",
		ListKind::Unordered => "ul",
	};
	let mut html = format!("<{tag} class=\"{prefix}-list\">");
	for item in &list.items {
		html.push_str(&format!("<li>{}</li>", escape_html(item)));
	}
	html.push_str(&format!("</{tag}>"));
	html
}

fn placeholder(config: &RenderConfig) -> String {
	format!(
		"<div class=\"{}-element__placeholder\">{}</div>",
		config.class_prefix,
		escape_html(&config.placeholder)
	)
}

/// Resolve an image URL against the asset base. Absolute URLs, data URIs
/// and host-absolute paths pass through untouched.
fn resolve_asset_url(url: &str, base: &str) -> String {
	if base.is_empty()
		|| url.starts_with("http://")
		|| url.starts_with("https://")
		|| url.starts_with("data:")
		|| url.starts_with('/')
	{
		return url.to_string();
	}
	format!("{}/{}", base.trim_end_matches('/'), url)
}

/// Escape HTML special characters for text content.
fn escape_html(input: &str) -> String {
	input
		.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}

/// Escape a value for use inside a double-quoted attribute.
fn escape_attr(input: &str) -> String {
	input
		.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}
