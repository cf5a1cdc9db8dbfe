//! Colors and palettes shared by the visualizations.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Same color with alpha `a`.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Parse `#rrggbb` or `#rgb`. The leading `#` is optional.
	pub fn from_hex(hex: &str) -> Option<Self> {
		let hex = hex.trim().trim_start_matches('#');
		if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
			return None;
		}
		let channel = |s: &str| u8::from_str_radix(s, 16).ok();
		match hex.len() {
			6 => Some(Self::rgb(
				channel(&hex[0..2])?,
				channel(&hex[2..4])?,
				channel(&hex[4..6])?,
			)),
			3 => {
				let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
				Some(Self::rgb(short(0)?, short(1)?, short(2)?))
			}
			_ => None,
		}
	}

	/// `rgba(...)` string for styles and canvas strokes.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Cycling palette for groups that have no configured color.
#[derive(Clone, Debug)]
pub struct GroupPalette {
	/// Colors in assignment order.
	pub colors: Vec<Color>,
}

impl GroupPalette {
	/// Blue, green, yellow, purple.
	pub fn primary() -> Self {
		Self {
			colors: vec![
				Color::rgb(59, 130, 246),
				Color::rgb(34, 197, 94),
				Color::rgb(234, 179, 8),
				Color::rgb(168, 85, 247),
			],
		}
	}

	/// Color at `index`, cycling through the palette.
	pub fn get(&self, index: usize) -> Color {
		self.colors[index % self.colors.len()]
	}
}

impl Default for GroupPalette {
	fn default() -> Self {
		Self::primary()
	}
}

/// Bar and icon colors for the two contribution directions.
pub const INCREASING: Color = Color::rgb(74, 222, 128);
/// Bars and arrows of decreasing contributions.
pub const DECREASING: Color = Color::rgb(248, 113, 113);
/// Graph edges.
pub const EDGE: Color = Color::rgb(100, 116, 139);
/// Edges touching the selected node.
pub const EDGE_ACTIVE: Color = Color::rgb(96, 165, 250);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_long_and_short_hex() {
		assert_eq!(Color::from_hex("#3b82f6"), Some(Color::rgb(59, 130, 246)));
		assert_eq!(Color::from_hex("fff"), Some(Color::rgb(255, 255, 255)));
		assert_eq!(Color::from_hex("#12345"), None);
		assert_eq!(Color::from_hex("#gg0000"), None);
		assert_eq!(Color::from_hex("#é00"), None);
	}

	#[test]
	fn css_output_drops_alpha_when_opaque() {
		assert_eq!(Color::rgb(239, 68, 68).to_css(), "#ef4444");
		assert_eq!(
			Color::rgb(100, 116, 139).with_alpha(0.25).to_css(),
			"rgba(100, 116, 139, 0.25)"
		);
	}

	#[test]
	fn palette_cycles() {
		let palette = GroupPalette::primary();
		assert_eq!(palette.get(0), palette.get(4));
		assert_ne!(palette.get(0), palette.get(1));
	}
}
