//! Minimal slash-command interaction payload.
//!
//! Only the option list and the resolved side tables matter to argument
//! parsing; everything else in the platform's interaction object stays with
//! the host.

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use crate::entity::Channel;
use crate::entity::Member;
use crate::entity::Role;
use crate::entity::User;

/// Dynamically-typed option payload. The platform's option protocol only
/// carries these three scalar kinds; entity references arrive as integer
/// ids paired with the resolved side tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
	Boolean(bool),
	Integer(i64),
	String(String),
}

impl OptionValue {
	pub fn kind_name(&self) -> &'static str {
		match self {
			OptionValue::Integer(_) => "integer",
			OptionValue::String(_) => "string",
			OptionValue::Boolean(_) => "boolean",
		}
	}
}

/// One named option as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionOption {
	pub name: String,
	pub value: OptionValue,
}

/// Entity snapshots the platform attaches to an interaction, keyed by id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResolvedData {
	#[serde(default)]
	pub users: HashMap<i64, User>,
	#[serde(default)]
	pub members: HashMap<i64, Member>,
	#[serde(default)]
	pub roles: HashMap<i64, Role>,
	#[serde(default)]
	pub channels: HashMap<i64, Channel>,
}

/// A slash-command invocation payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Interaction {
	#[serde(default)]
	pub options: Vec<InteractionOption>,
	#[serde(default)]
	pub resolved: ResolvedData,
}

impl Interaction {
	pub fn with_options(options: Vec<InteractionOption>) -> Self {
		Self {
			options,
			resolved: ResolvedData::default(),
		}
	}

	pub fn push_option(&mut self, name: impl Into<String>, value: OptionValue) {
		self.options.push(InteractionOption {
			name: name.into(),
			value,
		});
	}
}
