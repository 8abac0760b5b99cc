//! The argument type system: one trait, seven concrete strategies.

use async_trait::async_trait;

use crate::context::InvocationContext;
use crate::def::ArgDef;
use crate::def::OptionSpec;
use crate::error::ArgError;
use crate::options::SlashOptions;
use crate::value::ArgValue;

mod adv_user;
mod channel;
mod float;
mod int;
mod string;
mod user;
mod user_id;

pub use adv_user::AdvUserArg;
pub use adv_user::AdvUserMatch;
pub use channel::ChannelArg;
pub use float::FloatArg;
pub use int::IntArg;
pub use string::StringArg;
pub use user::UserArg;
pub use user_id::UserIdArg;

/// Contract every argument type implements.
///
/// `matches` is split from `from_message` so a variable-arity tokenizer can
/// probe several candidate types for one token before committing, without
/// paying parse cost or triggering side effects like a live fetch.
/// Implementations are configuration-only and safely shared across
/// concurrent invocations.
#[async_trait]
pub trait ArgType: Send + Sync {
	/// Pure, non-mutating lookahead: could this token plausibly belong to
	/// this argument? Must not allocate or fail.
	fn matches(&self, def: &ArgDef, part: &str) -> bool;

	/// Authoritative parse of one text token. May consult the guild
	/// directory and the live session.
	async fn from_message(
		&self,
		def: &ArgDef,
		part: &str,
		ctx: &InvocationContext,
	) -> Result<ArgValue, ArgError>;

	/// Authoritative parse from the structured option map. The raw token
	/// path plays no part here.
	async fn from_interaction(
		&self,
		def: &ArgDef,
		ctx: &InvocationContext,
		opts: &SlashOptions<'_>,
	) -> Result<ArgValue, ArgError>;

	/// Short human label for generated documentation.
	fn help_name(&self) -> String;

	/// How this argument surfaces on the slash-command registry; types that
	/// accept several shapes register a companion `<name>-id` option.
	fn slash_options(&self, def: &ArgDef) -> Vec<OptionSpec>;
}

/// Strict user-mention grammar: `<@id>` or `<@!id>` (nickname form), both
/// delimiters mandatory.
pub(crate) fn parse_user_mention(part: &str) -> Option<i64> {
	let body = part.strip_prefix("<@")?.strip_suffix('>')?;
	let body = body.strip_prefix('!').unwrap_or(body);
	parse_id(body)
}

/// Strict channel-mention grammar: `<#id>`.
pub(crate) fn parse_channel_mention(part: &str) -> Option<i64> {
	let body = part.strip_prefix("<#")?.strip_suffix('>')?;
	parse_id(body)
}

fn parse_id(body: &str) -> Option<i64> {
	if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	body.parse().ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn mention_grammar_is_strict() {
		assert_eq!(parse_user_mention("<@123>"), Some(123));
		assert_eq!(parse_user_mention("<@!123>"), Some(123));
		assert_eq!(parse_user_mention("<@123"), None);
		assert_eq!(parse_user_mention("@123>"), None);
		assert_eq!(parse_user_mention("<@abc>"), None);
		assert_eq!(parse_user_mention("<@>"), None);
		assert_eq!(parse_channel_mention("<#55>"), Some(55));
		assert_eq!(parse_channel_mention("<#!55>"), None);
	}
}
