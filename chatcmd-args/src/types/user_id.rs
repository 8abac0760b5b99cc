//! Bare user-id arguments: a mention or a plain numeric id.
//!
//! The only type that accepts a target with no guild membership and no
//! directory entry at all; it never touches the directory or the network.

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
pub struct UserIdArg;

#[async_trait]
impl ArgType for UserIdArg {
	fn matches(&self, _def: &ArgDef, part: &str) -> bool {
		if part.starts_with("<@") && part.ends_with('>') {
			return true;
		}

		part.parse::<i64>().is_ok()
	}

	async fn from_message(
		&self,
		_def: &ArgDef,
		part: &str,
		_ctx: &InvocationContext,
	) -> Result<ArgValue, ArgError> {
		if part.starts_with("<@") {
			let id = parse_user_mention(part)
				.ok_or_else(|| ArgError::ImproperMention(part.to_string()))?;
			return Ok(ArgValue::Int(id));
		}

		match part.parse::<i64>() {
			Ok(id) => Ok(ArgValue::Int(id)),
			Err(_) => Err(ArgError::ImproperMention(part.to_string())),
		}
	}

	async fn from_interaction(
		&self,
		def: &ArgDef,
		_ctx: &InvocationContext,
		opts: &SlashOptions<'_>,
	) -> Result<ArgValue, ArgError> {
		// Prefer the native user option when the caller supplied one.
		if let Some(user) = opts.user_opt(&def.name)? {
			return Ok(ArgValue::Int(user.id));
		}

		let companion = format!("{}-id", def.name);
		let raw = opts.string(&companion)?;
		let id: i64 = raw.parse().map_err(|_| ArgError::InvalidInt(raw.clone()))?;
		Ok(ArgValue::Int(id))
	}

	fn help_name(&self) -> String {
		"Mention/ID".to_string()
	}

	fn slash_options(&self, def: &ArgDef) -> Vec<OptionSpec> {
		// The platform has no "one of several shapes" option kind, so this
		// type registers both a native user reference and a string id.
		let mut id_opt = def.slash_option(OptionKind::String);
		id_opt.name = format!("{}-id", id_opt.name);

		vec![id_opt, def.slash_option(OptionKind::User)]
	}
}
