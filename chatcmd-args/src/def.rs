//! Static argument declarations and their slash-command option surface.

use std::sync::Arc;

use crate::types::ArgType;
use crate::value::ArgValue;

/// Option kinds understood by the interaction platform's command registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
	Integer,
	String,
	Boolean,
	User,
	Channel,
	Role,
}

/// A single named option as registered with the interaction platform. Some
/// argument types surface as more than one of these (see
/// [`crate::UserIdArg`] and [`crate::AdvUserArg`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
	pub name: String,
	pub description: String,
	pub kind: OptionKind,
}

/// One declared argument of a command: a unique name, the type strategy
/// that parses it, help text for generated documentation, and the value an
/// invocation starts from when the argument is absent.
///
/// Definitions are built once at command-registration time and never
/// mutated afterwards; the name is matched case-insensitively against
/// structured-option keys.
#[derive(Clone)]
pub struct ArgDef {
	pub name: String,
	pub help: String,
	pub default: ArgValue,
	pub kind: Arc<dyn ArgType>,
}

impl ArgDef {
	pub fn new(name: impl Into<String>, kind: impl ArgType + 'static) -> Self {
		Self::with_kind(name, Arc::new(kind))
	}

	pub fn with_kind(name: impl Into<String>, kind: Arc<dyn ArgType>) -> Self {
		Self {
			name: name.into(),
			help: String::new(),
			default: ArgValue::None,
			kind,
		}
	}

	pub fn help(mut self, help: impl Into<String>) -> Self {
		self.help = help.into();
		self
	}

	pub fn default_value(mut self, value: ArgValue) -> Self {
		self.default = value;
		self
	}

	/// The standard single-option projection of this definition: the help
	/// text capped at 100 characters, falling back to the bare name when no
	/// help is set.
	pub fn slash_option(&self, kind: OptionKind) -> OptionSpec {
		let description = if self.help.is_empty() {
			self.name.clone()
		} else {
			cut_short(&self.help, 100)
		};

		OptionSpec {
			name: self.name.clone(),
			description,
			kind,
		}
	}
}

impl std::fmt::Debug for ArgDef {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ArgDef")
			.field("name", &self.name)
			.field("help", &self.help)
			.field("default", &self.default)
			.field("kind", &self.kind.help_name())
			.finish()
	}
}

/// Truncate to `max` characters, replacing the tail with an ellipsis when
/// the input is longer.
fn cut_short(s: &str, max: usize) -> String {
	if s.chars().count() <= max {
		return s.to_string();
	}

	let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
	out.push_str("...");
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::StringArg;

	#[test]
	fn short_help_is_kept_verbatim() {
		let def = ArgDef::new("reason", StringArg).help("Why");
		let opt = def.slash_option(OptionKind::String);
		assert_eq!(opt.description, "Why");
	}

	#[test]
	fn long_help_is_cut_with_ellipsis() {
		let help = "x".repeat(150);
		let def = ArgDef::new("reason", StringArg).help(help);
		let opt = def.slash_option(OptionKind::String);
		assert_eq!(opt.description.chars().count(), 100);
		assert!(opt.description.ends_with("..."));
	}

	#[test]
	fn empty_help_falls_back_to_name() {
		let def = ArgDef::new("reason", StringArg);
		let opt = def.slash_option(OptionKind::String);
		assert_eq!(opt.description, "reason");
	}
}
