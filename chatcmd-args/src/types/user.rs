//! User arguments resolved from mentions, with optional username search.

use async_trait::async_trait;

use super::ArgType;
use super::parse_user_mention;
use crate::context::InvocationContext;
use crate::def::ArgDef;
use crate::def::OptionKind;
use crate::def::OptionSpec;
use crate::error::ArgError;
use crate::options::SlashOptions;
use crate::value::ArgValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct UserArg {
	/// When set, only the exact mention form is accepted; the fuzzy
	/// username search never runs.
	pub require_mention: bool,
}

impl UserArg {
	pub const fn new() -> Self {
		Self {
			require_mention: false,
		}
	}

	pub const fn mention_only() -> Self {
		Self {
			require_mention: true,
		}
	}
}

#[async_trait]
impl ArgType for UserArg {
	fn matches(&self, _def: &ArgDef, part: &str) -> bool {
		if self.require_mention {
			return part.starts_with("<@") && part.ends_with('>');
		}

		// Username search accepts any token.
		true
	}

	async fn from_message(
		&self,
		_def: &ArgDef,
		part: &str,
		ctx: &InvocationContext,
	) -> Result<ArgValue, ArgError> {
		if part.starts_with("<@") {
			// Mention syntax commits to the mention path: the id must parse
			// and must reference someone attached to the message.
			let user = parse_user_mention(part)
				.and_then(|id| ctx.mentioned_user(id))
				.ok_or_else(|| ArgError::ImproperMention(part.to_string()))?;
			return Ok(ArgValue::User(user));
		}

		if !self.require_mention {
			if let Some(guild) = &ctx.guild {
				let member = ctx.search_member(guild, part)?;
				return Ok(ArgValue::User(member.user()));
			}
		}

		Err(ArgError::ImproperMention(part.to_string()))
	}

	async fn from_interaction(
		&self,
		def: &ArgDef,
		_ctx: &InvocationContext,
		opts: &SlashOptions<'_>,
	) -> Result<ArgValue, ArgError> {
		Ok(ArgValue::User(opts.user(&def.name)?))
	}

	fn help_name(&self) -> String {
		if self.require_mention {
			"User Mention".to_string()
		} else {
			"User".to_string()
		}
	}

	fn slash_options(&self, def: &ArgDef) -> Vec<OptionSpec> {
		vec![def.slash_option(OptionKind::User)]
	}
}
