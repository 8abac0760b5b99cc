//! 64-bit float arguments with optional range constraints.
//!
//! The interaction option protocol has no native float kind, so the
//! structured path reads a string option and parses it.

use async_trait::async_trait;

use super::ArgType;
use crate::context::InvocationContext;
use crate::def::ArgDef;
use crate::def::OptionKind;
use crate::def::OptionSpec;
use crate::error::ArgError;
use crate::options::SlashOptions;
use crate::value::ArgValue;

/// `min == max` disables the range check, same sentinel as [`super::IntArg`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatArg {
	pub min: f64,
	pub max: f64,
}

impl FloatArg {
	pub const fn new() -> Self {
		Self { min: 0.0, max: 0.0 }
	}

	pub const fn ranged(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	fn check_range(&self, def: &ArgDef, v: f64) -> Result<(), ArgError> {
		if self.min != self.max && (v < self.min || v > self.max) {
			return Err(ArgError::OutOfRangeFloat {
				name: def.name.clone(),
				got: v,
				min: self.min,
				max: self.max,
			});
		}
		Ok(())
	}
}

#[async_trait]
impl ArgType for FloatArg {
	fn matches(&self, _def: &ArgDef, part: &str) -> bool {
		part.parse::<f64>().is_ok()
	}

	async fn from_message(
		&self,
		def: &ArgDef,
		part: &str,
		_ctx: &InvocationContext,
	) -> Result<ArgValue, ArgError> {
		let v: f64 = part
			.parse()
			.map_err(|_| ArgError::InvalidFloat(part.to_string()))?;
		self.check_range(def, v)?;
		Ok(ArgValue::Float(v))
	}

	async fn from_interaction(
		&self,
		def: &ArgDef,
		_ctx: &InvocationContext,
		opts: &SlashOptions<'_>,
	) -> Result<ArgValue, ArgError> {
		let s = opts.string(&def.name)?;
		let v: f64 = s.parse().map_err(|_| ArgError::InvalidFloat(s.clone()))?;
		self.check_range(def, v)?;
		Ok(ArgValue::Float(v))
	}

	fn help_name(&self) -> String {
		"Decimal number".to_string()
	}

	fn slash_options(&self, def: &ArgDef) -> Vec<OptionSpec> {
		vec![def.slash_option(OptionKind::String)]
	}
}
