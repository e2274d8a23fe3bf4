use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::ColorScheme;

/// Social network a word sequence is generated for.
///
/// The set is closed: each platform selects a bias vocabulary and a default
/// color scheme.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Platform {
	Facebook,
	Twitter,
	Reddit,
}

impl Platform {
	/// All platforms, in display order.
	pub const ALL: [Platform; 3] = [Platform::Facebook, Platform::Twitter, Platform::Reddit];

	/// Display name.
	pub fn name(&self) -> &'static str {
		match self {
			Platform::Facebook => "Facebook",
			Platform::Twitter => "Twitter",
			Platform::Reddit => "Reddit",
		}
	}

	/// Label used for the platform tab.
	pub fn tab_label(&self) -> &'static str {
		match self {
			Platform::Facebook => "📘 Facebook",
			Platform::Twitter => "🐦 Twitter",
			Platform::Reddit => "👽 Reddit",
		}
	}

	/// Color scheme the platform panel is rendered with.
	pub fn color_scheme(&self) -> ColorScheme {
		match self {
			Platform::Facebook => ColorScheme::Blues,
			Platform::Twitter => ColorScheme::Cool,
			Platform::Reddit => ColorScheme::Oranges,
		}
	}
}

impl fmt::Display for Platform {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Platform {
	type Err = String;

	/// Parses a platform name, ignoring case and surrounding whitespace.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let wanted = s.trim();
		Platform::ALL
			.into_iter()
			.find(|p| p.name().eq_ignore_ascii_case(wanted))
			.ok_or_else(|| format!("Unknown platform '{}', expected one of Facebook, Twitter, Reddit", wanted))
	}
}
