//! Free-text arguments: any token matches, no validation.

use async_trait::async_trait;

use super::ArgType;
use crate::context::InvocationContext;
use crate::def::ArgDef;
use crate::def::OptionKind;
use crate::def::OptionSpec;
use crate::error::ArgError;
use crate::options::SlashOptions;
use crate::value::ArgValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct StringArg;

#[async_trait]
impl ArgType for StringArg {
	fn matches(&self, _def: &ArgDef, _part: &str) -> bool {
		true
	}

	async fn from_message(
		&self,
		_def: &ArgDef,
		part: &str,
		_ctx: &InvocationContext,
	) -> Result<ArgValue, ArgError> {
		Ok(ArgValue::Str(part.to_string()))
	}

	async fn from_interaction(
		&self,
		def: &ArgDef,
		_ctx: &InvocationContext,
		opts: &SlashOptions<'_>,
	) -> Result<ArgValue, ArgError> {
		Ok(ArgValue::Str(opts.string(&def.name)?))
	}

	fn help_name(&self) -> String {
		"Text".to_string()
	}

	fn slash_options(&self, def: &ArgDef) -> Vec<OptionSpec> {
		vec![def.slash_option(OptionKind::String)]
	}
}
