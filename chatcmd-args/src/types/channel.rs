//! Channel arguments resolved against the guild's channel directory.

use async_trait::async_trait;

use super::ArgType;
use super::parse_channel_mention;
use crate::context::InvocationContext;
use crate::def::ArgDef;
use crate::def::OptionKind;
use crate::def::OptionSpec;
use crate::error::ArgError;
use crate::options::SlashOptions;
use crate::value::ArgValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelArg;

#[async_trait]
impl ArgType for ChannelArg {
	fn matches(&self, _def: &ArgDef, part: &str) -> bool {
		if part.starts_with("<#") && part.ends_with('>') {
			return true;
		}

		part.parse::<i64>().is_ok()
	}

	async fn from_message(
		&self,
		_def: &ArgDef,
		part: &str,
		ctx: &InvocationContext,
	) -> Result<ArgValue, ArgError> {
		// Text commands outside a guild have no channel directory; this is
		// a valid, silent no-op rather than an error.
		let Some(guild) = &ctx.guild else {
			return Ok(ArgValue::None);
		};

		let id = if part.starts_with("<#") {
			parse_channel_mention(part)
				.ok_or_else(|| ArgError::ImproperMention(part.to_string()))?
		} else {
			part.parse::<i64>()
				.map_err(|_| ArgError::ImproperMention(part.to_string()))?
		};

		match guild.channel_copy(id) {
			Some(channel) => Ok(ArgValue::Channel(channel)),
			None => Err(ArgError::ImproperMention(part.to_string())),
		}
	}

	async fn from_interaction(
		&self,
		def: &ArgDef,
		ctx: &InvocationContext,
		opts: &SlashOptions<'_>,
	) -> Result<ArgValue, ArgError> {
		let Some(guild) = &ctx.guild else {
			return Ok(ArgValue::None);
		};

		// The resolved side table is a snapshot from the platform;
		// re-resolve through the local directory so the caller gets the
		// cached channel state.
		let channel = opts.channel(&def.name)?;
		match guild.channel_copy(channel.id) {
			Some(channel) => Ok(ArgValue::Channel(channel)),
			None => Err(ArgError::ChannelNotFound),
		}
	}

	fn help_name(&self) -> String {
		"Channel".to_string()
	}

	fn slash_options(&self, def: &ArgDef) -> Vec<OptionSpec> {
		vec![def.slash_option(OptionKind::Channel)]
	}
}
