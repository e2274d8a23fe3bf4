use std::fmt;

use serde::{Deserialize, Serialize};

/// Continuous colormap used to tint the words of a cloud.
///
/// Each scheme is a piecewise-linear gradient sampled with `t` in `[0, 1]`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorScheme {
	Blues,
	Cool,
	Oranges,
}

const BLUES: &[[u8; 3]] = &[
	[247, 251, 255],
	[198, 219, 239],
	[107, 174, 214],
	[33, 113, 181],
	[8, 48, 107],
];

const COOL: &[[u8; 3]] = &[[0, 255, 255], [255, 0, 255]];

const ORANGES: &[[u8; 3]] = &[
	[255, 245, 235],
	[253, 208, 162],
	[253, 141, 60],
	[217, 72, 1],
	[127, 39, 4],
];

impl ColorScheme {
	fn stops(&self) -> &'static [[u8; 3]] {
		match self {
			ColorScheme::Blues => BLUES,
			ColorScheme::Cool => COOL,
			ColorScheme::Oranges => ORANGES,
		}
	}

	/// Samples the gradient at `t`; values outside `[0, 1]` are clamped.
	pub fn sample(&self, t: f32) -> [u8; 3] {
		let stops = self.stops();
		let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

		let segments = (stops.len() - 1) as f32;
		let position = t * segments;
		let index = (position.floor() as usize).min(stops.len() - 2);
		let local = position - index as f32;

		let (from, to) = (stops[index], stops[index + 1]);
		let mut rgb = [0u8; 3];
		for channel in 0..3 {
			let value = from[channel] as f32 + (to[channel] as f32 - from[channel] as f32) * local;
			rgb[channel] = value.round() as u8;
		}
		rgb
	}
}

impl fmt::Display for ColorScheme {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			ColorScheme::Blues => "Blues",
			ColorScheme::Cool => "cool",
			ColorScheme::Oranges => "Oranges",
		})
	}
}
