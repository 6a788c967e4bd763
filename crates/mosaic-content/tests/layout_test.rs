//! Layout engine tests: the assignment table, determinism, override rules

use mosaic_content::element::{ContentElement, Position, Width};
use mosaic_content::layout::{arrange, LayoutMode};
use rstest::rstest;

fn elements(n: usize) -> Vec<ContentElement> {
	(0..n)
		.map(|i| ContentElement::text(format!("<p>{i}</p>")))
		.collect()
}

#[rstest]
#[case::first(0, Position::Left, Width::Half)]
#[case::second(1, Position::Right, Width::Half)]
#[case::overflow(2, Position::Full, Width::Full)]
#[case::more_overflow(3, Position::Full, Width::Full)]
fn horizontal_assigns_the_two_column_pair_then_stacks(
	#[case] index: usize,
	#[case] position: Position,
	#[case] width: Width,
) {
	// Act
	let arranged = arrange(LayoutMode::Horizontal, &elements(4));

	// Assert
	assert_eq!(arranged[index].position, position);
	assert_eq!(arranged[index].width, width);
}

#[test]
fn horizontal_gutters_and_overflow_margins() {
	let arranged = arrange(LayoutMode::Horizontal, &elements(3));

	assert_eq!(arranged[0].margin.right, 10);
	assert_eq!(arranged[0].margin.left, 0);
	assert_eq!(arranged[1].margin.left, 10);
	assert_eq!(arranged[1].margin.right, 0);
	assert_eq!(arranged[2].margin.top, 20);
	assert_eq!(arranged[2].margin.bottom, 0);
}

#[test]
fn vertical_stacks_everything_full_width_with_bottom_spacing() {
	let arranged = arrange(LayoutMode::Vertical, &elements(3));

	for element in &arranged {
		assert_eq!(element.position, Position::Full);
		assert_eq!(element.width, Width::Full);
		assert_eq!(
			(element.margin.top, element.margin.bottom),
			(0, 20),
			"vertical spacing comes from the bottom margin only"
		);
		assert_eq!(element.margin.left, 0);
		assert_eq!(element.margin.right, 0);
	}
}

// Grid slot sizing depends on cardinality; these are the boundaries.

#[test]
fn grid_with_one_element_centers_it() {
	let arranged = arrange(LayoutMode::Grid, &elements(1));

	assert_eq!(arranged[0].position, Position::Center);
	assert_eq!(arranged[0].width, Width::Full);
}

#[test]
fn grid_with_two_elements_makes_a_half_width_pair() {
	let arranged = arrange(LayoutMode::Grid, &elements(2));

	assert_eq!(arranged[0].position, Position::Left);
	assert_eq!(arranged[1].position, Position::Right);
	assert!(arranged.iter().all(|e| e.width == Width::Half));
}

#[test]
fn grid_with_three_elements_goes_to_uniform_thirds() {
	let arranged = arrange(LayoutMode::Grid, &elements(3));

	for element in &arranged {
		assert_eq!(element.position, Position::Full);
		assert_eq!(element.width, Width::Third);
		assert_eq!(element.margin.left, 10);
		assert_eq!(element.margin.right, 10);
		assert_eq!(element.margin.bottom, 20);
		assert_eq!(element.margin.top, 0);
	}
}

#[test]
fn arrange_is_deterministic() {
	// Arrange
	let input = elements(5);

	// Act
	let first = arrange(LayoutMode::Grid, &input);
	let second = arrange(LayoutMode::Grid, &input);

	// Assert - same input, same assignment, ids included
	assert_eq!(first, second);
}

#[test]
fn a_later_layout_pass_overwrites_manual_overrides() {
	// Arrange - manual tweak after a horizontal pass
	let mut tweaked = arrange(LayoutMode::Horizontal, &elements(2));
	tweaked[0].position = Position::Center;
	tweaked[0].width = Width::Quarter;
	tweaked[0].margin.top = 99;

	// Act - last layout choice wins, no merge
	let rearranged = arrange(LayoutMode::Vertical, &tweaked);

	// Assert
	assert_eq!(rearranged[0].position, Position::Full);
	assert_eq!(rearranged[0].width, Width::Full);
	assert_eq!(rearranged[0].margin.top, 0);
	assert_eq!(rearranged[0].margin.bottom, 20);
}

#[test]
fn arrange_does_not_touch_content_or_ids() {
	// Arrange
	let input = elements(3);
	let ids: Vec<_> = input.iter().map(|e| e.id.clone()).collect();

	// Act
	let arranged = arrange(LayoutMode::Grid, &input);

	// Assert
	let out_ids: Vec<_> = arranged.iter().map(|e| e.id.clone()).collect();
	assert_eq!(ids, out_ids);
	assert_eq!(input[0].content, arranged[0].content);
}
