//! Signed 64-bit integer arguments with optional range constraints.

use async_trait::async_trait;
use chatcmd_model::OptionValue;

use super::ArgType;
use crate::context::InvocationContext;
use crate::def::ArgDef;
use crate::def::OptionKind;
use crate::def::OptionSpec;
use crate::error::ArgError;
use crate::options::SlashOptions;
use crate::value::ArgValue;

/// `min == max` means no range constraint is configured; this is a
/// sentinel, not a one-value range.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntArg {
	pub min: i64,
	pub max: i64,

	/// Register the interaction option as a string instead of a native
	/// integer. Snowflake-sized values lose precision in the platform's
	/// native integer encoding, so they travel as strings; the parse path
	/// accepts either representation regardless.
	pub string_encoded: bool,
}

impl IntArg {
	pub const fn new() -> Self {
		Self {
			min: 0,
			max: 0,
			string_encoded: false,
		}
	}

	pub const fn ranged(min: i64, max: i64) -> Self {
		Self {
			min,
			max,
			string_encoded: false,
		}
	}

	pub const fn string_encoded() -> Self {
		Self {
			min: 0,
			max: 0,
			string_encoded: true,
		}
	}

	fn check_range(&self, def: &ArgDef, v: i64) -> Result<(), ArgError> {
		if self.min != self.max && (v < self.min || v > self.max) {
			return Err(ArgError::OutOfRange {
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
impl ArgType for IntArg {
	fn matches(&self, _def: &ArgDef, part: &str) -> bool {
		part.parse::<i64>().is_ok()
	}

	async fn from_message(
		&self,
		def: &ArgDef,
		part: &str,
		_ctx: &InvocationContext,
	) -> Result<ArgValue, ArgError> {
		let v: i64 = part
			.parse()
			.map_err(|_| ArgError::InvalidInt(part.to_string()))?;
		self.check_range(def, v)?;
		Ok(ArgValue::Int(v))
	}

	async fn from_interaction(
		&self,
		def: &ArgDef,
		_ctx: &InvocationContext,
		opts: &SlashOptions<'_>,
	) -> Result<ArgValue, ArgError> {
		let v = match opts.any(&def.name) {
			Some(OptionValue::Integer(v)) => *v,
			Some(OptionValue::String(s)) => s
				.parse()
				.map_err(|_| ArgError::InvalidInt(s.clone()))?,
			Some(other) => {
				return Err(ArgError::OptionTypeMismatch {
					name: def.name.clone(),
					expected: "integer",
					got: other.kind_name(),
				});
			}
			None => {
				return Err(ArgError::MissingOption {
					name: def.name.clone(),
					expected: "integer",
				});
			}
		};

		self.check_range(def, v)?;
		Ok(ArgValue::Int(v))
	}

	fn help_name(&self) -> String {
		"Whole number".to_string()
	}

	fn slash_options(&self, def: &ArgDef) -> Vec<OptionSpec> {
		let kind = if self.string_encoded {
			OptionKind::String
		} else {
			OptionKind::Integer
		};
		vec![def.slash_option(kind)]
	}
}
