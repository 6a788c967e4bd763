//! Renderer tests: HTML structure, placeholders, the stored envelope

use mosaic_content::block::ContentBlock;
use mosaic_content::element::{
	CellAlign, ColumnStyle, ContentElement, ElementStyle, ListData, ListKind, TableData,
};
use mosaic_content::error::ContentError;
use mosaic_content::layout::LayoutMode;
use mosaic_content::render::{render, RenderConfig, StoredContent};
use rstest::rstest;

#[test]
fn horizontal_scenario_renders_both_fragments_in_order() {
	// Arrange - the canonical two-column section: text left, image right
	let block = ContentBlock::new("Who We Are", LayoutMode::Horizontal)
		.with_element(ContentElement::text("<p>Our story.</p>"))
		.with_element(ContentElement::image("https://cdn.example.com/team.jpg"))
		.with_layout(LayoutMode::Horizontal);

	// Act
	let rendered = render(&block, &RenderConfig::default());

	// Assert - layout attributes assigned by the pass
	assert_eq!(block.elements[0].position.as_str(), "left");
	assert_eq!(block.elements[0].width.as_css(), "50%");
	assert_eq!(block.elements[1].position.as_str(), "right");
	assert_eq!(block.elements[1].width.as_css(), "50%");

	// Assert - both fragments inside the flex wrapper, in element order
	assert!(rendered.html.contains("display:flex"));
	let text_at = rendered.html.find("<p>Our story.</p>").unwrap();
	let image_at = rendered.html.find("team.jpg").unwrap();
	assert!(text_at < image_at);
}

#[test]
fn the_title_becomes_a_heading_only_when_non_empty() {
	let titled = render(
		&ContentBlock::new("Mission", LayoutMode::Vertical),
		&RenderConfig::default(),
	);
	let untitled = render(
		&ContentBlock::new("", LayoutMode::Vertical),
		&RenderConfig::default(),
	);

	assert!(titled.html.contains("<h2 class=\"mosaic-block__title\">Mission</h2>"));
	assert!(!untitled.html.contains("<h2"));
}

#[test]
fn text_fragments_pass_through_verbatim() {
	// The fragment is an opaque HTML contract with the external editor;
	// it must not be escaped or rewritten.
	let fragment = "<p>Line<br><strong>bold &amp; proud</strong></p>";
	let block = ContentBlock::new("t", LayoutMode::Vertical)
		.with_element(ContentElement::text(fragment));

	let rendered = render(&block, &RenderConfig::default());

	assert!(rendered.html.contains(fragment));
}

#[test]
fn grid_renders_a_responsive_grid_wrapper() {
	let block = ContentBlock::new("t", LayoutMode::Grid)
		.with_element(ContentElement::text("<p>1</p>"))
		.with_element(ContentElement::text("<p>2</p>"))
		.with_element(ContentElement::text("<p>3</p>"));

	let rendered = render(&block, &RenderConfig::default());

	assert!(rendered.html.contains("display:grid"));
	assert!(rendered.html.contains("repeat(auto-fit"));
}

#[test]
fn relative_image_urls_resolve_against_the_asset_base() {
	// Arrange
	let config = RenderConfig::new().asset_base_url("https://cdn.example.com/assets");
	let block = ContentBlock::new("t", LayoutMode::Vertical)
		.with_element(ContentElement::image("uploads/photo.jpg"));

	// Act
	let rendered = render(&block, &config);

	// Assert
	assert!(rendered
		.html
		.contains("src=\"https://cdn.example.com/assets/uploads/photo.jpg\""));
}

#[test]
fn image_styling_knobs_show_up_as_inline_styles() {
	// Arrange
	let mut element = ContentElement::image("/uploads/photo.jpg");
	element.style = ElementStyle {
		image_width_percent: Some(50),
		image_max_height_px: Some(320),
		..ElementStyle::default()
	};
	let block = ContentBlock::new("t", LayoutMode::Vertical).with_element(element);

	// Act
	let rendered = render(&block, &RenderConfig::default());

	// Assert
	assert!(rendered.html.contains("width:50%"));
	assert!(rendered.html.contains("max-height:320px"));
}

#[test]
fn tables_render_headers_and_cells_with_column_styles() {
	// Arrange
	let mut table = TableData::with_headers(["Year", "Revenue"]);
	table.styles[1] = ColumnStyle {
		align: CellAlign::Right,
		width: Some("120px".into()),
		background: None,
	};
	table.add_row();
	table.set_cell(0, 0, "2004").unwrap();
	table.set_cell(0, 1, "1.2M").unwrap();
	let block = ContentBlock::new("t", LayoutMode::Vertical).with_element(ContentElement::table(table));

	// Act
	let rendered = render(&block, &RenderConfig::default());

	// Assert
	assert!(rendered.html.contains("<thead><tr><th style=\"text-align:left\">Year</th>"));
	assert!(rendered.html.contains("text-align:right;width:120px"));
	assert!(rendered.html.contains("<td style=\"text-align:right\">1.2M</td>"));
}

#[test]
fn table_cell_text_is_escaped() {
	let mut table = TableData::with_headers(["Notes"]);
	table.add_row();
	table.set_cell(0, 0, "<script>alert(1)</script>").unwrap();
	let block = ContentBlock::new("t", LayoutMode::Vertical).with_element(ContentElement::table(table));

	let rendered = render(&block, &RenderConfig::default());

	assert!(!rendered.html.contains("<script>"));
	assert!(rendered.html.contains("&lt;script&gt;"));
}

#[rstest]
#[case::ordered(ListKind::Ordered, "<ol", "</ol>")]
#[case::unordered(ListKind::Unordered, "<ul", "</ul>")]
fn lists_pick_their_tag_from_the_kind(
	#[case] kind: ListKind,
	#[case] open: &str,
	#[case] close: &str,
) {
	let block = ContentBlock::new("t", LayoutMode::Vertical)
		.with_element(ContentElement::list(ListData::new(kind, ["alpha", "beta"])));

	let rendered = render(&block, &RenderConfig::default());

	assert!(rendered.html.contains(open));
	assert!(rendered.html.contains(close));
	assert!(rendered.html.contains("<li>alpha</li><li>beta</li>"));
}

#[rstest]
#[case::blank_text(ContentElement::text("   "))]
#[case::blank_image(ContentElement::image(""))]
#[case::headerless_table(ContentElement::table(TableData::default()))]
#[case::empty_list(ContentElement::list(ListData::default()))]
fn empty_payloads_render_a_visible_placeholder(#[case] element: ContentElement) {
	// A partially filled-in block must never produce a broken page.
	let config = RenderConfig::new().placeholder("Nothing here yet");
	let block = ContentBlock::new("t", LayoutMode::Vertical).with_element(element);

	let rendered = render(&block, &config);

	assert!(rendered.html.contains("mosaic-element__placeholder"));
	assert!(rendered.html.contains("Nothing here yet"));
}

#[test]
fn an_empty_block_renders_an_empty_container() {
	let rendered = render(
		&ContentBlock::new("", LayoutMode::Vertical),
		&RenderConfig::default(),
	);

	assert!(rendered.html.starts_with("<section class=\"mosaic-block"));
	assert!(rendered.html.ends_with("</div></section>"));
}

#[test]
fn the_stored_envelope_round_trips() {
	// Arrange
	let block = ContentBlock::new("About", LayoutMode::Horizontal)
		.with_element(ContentElement::text("<p>x</p>"))
		.with_layout(LayoutMode::Horizontal);
	let stored: StoredContent = render(&block, &RenderConfig::default()).into();

	// Act
	let encoded = stored.to_json_string().unwrap();
	let decoded = StoredContent::parse(&encoded).unwrap();

	// Assert - field-for-field, html and mirror alike
	assert_eq!(decoded, stored);
	assert_eq!(decoded.json, block);
}

#[test]
fn malformed_envelopes_fail_with_a_parse_error() {
	let result = StoredContent::parse("{\"html\": \"<p>\"");

	assert!(matches!(
		result,
		Err(ContentError::MalformedStoredContent(_))
	));
}

#[test]
fn both_artifacts_are_regenerated_from_the_same_input() {
	// Arrange
	let block = ContentBlock::new("Facts", LayoutMode::Vertical)
		.with_element(ContentElement::text("<p>v1</p>"));
	let first = render(&block, &RenderConfig::default());

	// Act - edit, then re-render; html and json move together
	let id = block.elements[0].id.clone();
	let edited = block
		.patch_element(
			&id,
			&mosaic_content::block::ElementPatch::content(
				mosaic_content::element::ElementContent::Text("<p>v2</p>".into()),
			),
		)
		.unwrap();
	let second = render(&edited, &RenderConfig::default());

	// Assert
	assert!(first.html.contains("v1") && !second.html.contains("v1"));
	assert!(second.html.contains("v2"));
	assert_eq!(second.json, edited);
}
