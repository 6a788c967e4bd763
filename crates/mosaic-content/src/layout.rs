//! Automatic layout assignment
//!
//! Given a layout mode and the ordered element list of a block, [`arrange`]
//! assigns position, width and margins to every element so a pure-CSS
//! renderer lays them out without per-element manual tuning. The assignment
//! depends only on the mode, each element's index and the element count, so
//! the pass is deterministic and safe to re-run at any time.

use crate::element::{ContentElement, Margins, Position, Width};
use crate::error::{ContentError, ContentResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Layout mode of a content block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
	/// Full-width elements stacked top to bottom (default)
	#[default]
	Vertical,
	/// A two-column pair, overflow elements stacking below it
	Horizontal,
	/// A responsive grid sized by element count
	Grid,
}

impl LayoutMode {
	/// Lowercase identifier, matching the serialized form.
	pub fn as_str(&self) -> &'static str {
		match self {
			LayoutMode::Vertical => "vertical",
			LayoutMode::Horizontal => "horizontal",
			LayoutMode::Grid => "grid",
		}
	}
}

impl fmt::Display for LayoutMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for LayoutMode {
	type Err = ContentError;

	fn from_str(s: &str) -> ContentResult<Self> {
		match s {
			"vertical" => Ok(LayoutMode::Vertical),
			"horizontal" => Ok(LayoutMode::Horizontal),
			"grid" => Ok(LayoutMode::Grid),
			other => Err(ContentError::UnsupportedLayout(other.to_string())),
		}
	}
}

/// Assign position, width and margins to every element for `mode`.
///
/// Returns a new element list; the inputs are untouched. Position, width and
/// all four margins are overwritten uniformly — the last layout choice wins
/// over any manual per-element override, and margins a rule does not name
/// are reset to 0. An empty list is legal and yields an empty list.
pub fn arrange(mode: LayoutMode, elements: &[ContentElement]) -> Vec<ContentElement> {
	let n = elements.len();
	elements
		.iter()
		.enumerate()
		.map(|(i, element)| {
			let (position, width, margin) = slot(mode, i, n);
			let mut element = element.clone();
			element.position = position;
			element.width = width;
			element.margin = margin;
			element
		})
		.collect()
}

/// The assignment table: slot for element `i` of `n` under `mode`.
fn slot(mode: LayoutMode, i: usize, n: usize) -> (Position, Width, Margins) {
	match mode {
		LayoutMode::Vertical => (
			Position::Full,
			Width::Full,
			Margins {
				bottom: 20,
				..Margins::default()
			},
		),
		LayoutMode::Horizontal => match i {
			0 => (
				Position::Left,
				Width::Half,
				Margins {
					right: 10,
					..Margins::default()
				},
			),
			1 => (
				Position::Right,
				Width::Half,
				Margins {
					left: 10,
					..Margins::default()
				},
			),
			// Overflow elements stack below the two-column pair.
			_ => (
				Position::Full,
				Width::Full,
				Margins {
					top: 20,
					..Margins::default()
				},
			),
		},
		LayoutMode::Grid => match n {
			1 => (Position::Center, Width::Full, Margins::default()),
			2 => (
				if i == 0 { Position::Left } else { Position::Right },
				Width::Half,
				Margins::default(),
			),
			// Three or more: uniform cells; the CSS grid wrapper does the
			// actual wrapping at render time.
			_ => (
				Position::Full,
				Width::Third,
				Margins {
					left: 10,
					right: 10,
					bottom: 20,
					..Margins::default()
				},
			),
		},
	}
}
