//! Error taxonomy for argument resolution.
//!
//! Every variant is an ordinary, user-displayable outcome: the dispatcher
//! renders the message and stops that one command. Nothing here aborts the
//! process, and no parse continues past a returned error.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ArgError {
	/// Token superficially matched but does not parse as a signed 64-bit
	/// integer (overflow included).
	#[error("`{0}` is not a whole number")]
	InvalidInt(String),

	#[error("`{0}` is not a number")]
	InvalidFloat(String),

	/// Parsed fine but fell outside the configured window. Carries the
	/// attempt and the bounds for direct display.
	#[error("`{name}` is out of range: got {got}, expected between {min} and {max}")]
	OutOfRange {
		name: String,
		got: i64,
		min: i64,
		max: i64,
	},

	#[error("`{name}` is out of range: got {got}, expected between {min} and {max}")]
	OutOfRangeFloat {
		name: String,
		got: f64,
		min: f64,
		max: f64,
	},

	/// Token used mention syntax but the mention was malformed or did not
	/// reference anyone attached to the message.
	#[error("`{0}` is not a proper mention")]
	ImproperMention(String),

	/// No entity matched in any available source, local or remote.
	#[error("no user found matching `{query}`")]
	UserNotFound { query: String },

	#[error("channel not found")]
	ChannelNotFound,

	/// More than one full match; never silently picks one.
	#[error(
		"too many users with that name: {}. Re-run the command with a narrower search, a mention or an ID",
		join_backquoted(.candidates)
	)]
	MultipleMatches { candidates: Vec<String> },

	/// Partial matches only (or a full match muddied by partials); lists
	/// full matches first.
	#[error(
		"did you mean one of these? {}. Re-run the command with a narrower search, a mention or an ID",
		join_backquoted(.candidates)
	)]
	DidYouMean { candidates: Vec<String> },

	/// A required structured option was absent from the interaction.
	#[error("missing required argument `{name}` (expected {expected})")]
	MissingOption {
		name: String,
		expected: &'static str,
	},

	/// The option existed but under a different dynamic kind. A caller bug,
	/// not user-input absence.
	#[error("argument `{name}` has the wrong kind (expected {expected}, got {got})")]
	OptionTypeMismatch {
		name: String,
		expected: &'static str,
		got: &'static str,
	},

	/// The option referenced an id missing from the interaction's resolved
	/// side tables. Distinct from [`ArgError::MissingOption`]: the option
	/// itself was present.
	#[error("option `{name}` referenced {kind} {id}, which was not resolved by the platform")]
	ResolvedNotFound {
		name: String,
		id: i64,
		kind: &'static str,
	},
}

fn join_backquoted(names: &[String]) -> String {
	let mut out = String::new();
	for name in names {
		if !out.is_empty() {
			out.push_str(", ");
		}
		out.push('`');
		out.push_str(name);
		out.push('`');
	}
	out
}
