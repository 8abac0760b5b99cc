//! Structured-option adapter over an interaction payload.
//!
//! Wraps the flat name/value option map plus the resolved side tables, and
//! exposes two access tiers per kind: `x(name)` fails on absence with
//! [`ArgError::MissingOption`], `x_opt(name)` reports absence as
//! `Ok(None)`. Type mismatches are errors on both tiers.

use std::collections::HashMap;

use chatcmd_model::Channel;
use chatcmd_model::Interaction;
use chatcmd_model::Member;
use chatcmd_model::OptionValue;
use chatcmd_model::ResolvedData;
use chatcmd_model::Role;
use chatcmd_model::User;

use crate::error::ArgError;

pub struct SlashOptions<'a> {
	options: HashMap<String, &'a OptionValue>,
	resolved: &'a ResolvedData,
}

impl<'a> SlashOptions<'a> {
	/// Index the interaction's options by lowercased name. Later duplicates
	/// win, mirroring how the platform deduplicates.
	pub fn from_interaction(interaction: &'a Interaction) -> Self {
		let mut options = HashMap::with_capacity(interaction.options.len());
		for opt in &interaction.options {
			options.insert(opt.name.to_lowercase(), &opt.value);
		}

		Self {
			options,
			resolved: &interaction.resolved,
		}
	}

	/// The raw dynamically-typed value, if the option was supplied at all.
	pub fn any(&self, name: &str) -> Option<&'a OptionValue> {
		self.options.get(&name.to_lowercase()).copied()
	}

	pub fn int64(&self, name: &str) -> Result<i64, ArgError> {
		self.int64_opt(name)?.ok_or_else(|| missing(name, "integer"))
	}

	pub fn int64_opt(&self, name: &str) -> Result<Option<i64>, ArgError> {
		match self.any(name) {
			None => Ok(None),
			Some(OptionValue::Integer(v)) => Ok(Some(*v)),
			Some(other) => Err(mismatch(name, "integer", other.kind_name())),
		}
	}

	pub fn string(&self, name: &str) -> Result<String, ArgError> {
		self.string_opt(name)?.ok_or_else(|| missing(name, "string"))
	}

	pub fn string_opt(&self, name: &str) -> Result<Option<String>, ArgError> {
		match self.any(name) {
			None => Ok(None),
			Some(OptionValue::String(s)) => Ok(Some(s.clone())),
			Some(other) => Err(mismatch(name, "string", other.kind_name())),
		}
	}

	pub fn boolean(&self, name: &str) -> Result<bool, ArgError> {
		self.boolean_opt(name)?.ok_or_else(|| missing(name, "boolean"))
	}

	pub fn boolean_opt(&self, name: &str) -> Result<Option<bool>, ArgError> {
		match self.any(name) {
			None => Ok(None),
			Some(OptionValue::Boolean(b)) => Ok(Some(*b)),
			Some(other) => Err(mismatch(name, "boolean", other.kind_name())),
		}
	}

	pub fn user(&self, name: &str) -> Result<User, ArgError> {
		self.user_opt(name)?.ok_or_else(|| missing(name, "user"))
	}

	/// Entity accessors extract the integer id option, then look the id up
	/// in the interaction's resolved side tables. A present option whose id
	/// is missing from the table is [`ArgError::ResolvedNotFound`], not a
	/// missing option.
	pub fn user_opt(&self, name: &str) -> Result<Option<User>, ArgError> {
		let Some(id) = self.int64_opt(name)? else {
			return Ok(None);
		};

		match self.resolved.users.get(&id) {
			Some(user) => Ok(Some(user.clone())),
			None => Err(resolved_missing(name, id, "user")),
		}
	}

	pub fn member(&self, name: &str) -> Result<Member, ArgError> {
		self.member_opt(name)?.ok_or_else(|| missing(name, "member"))
	}

	pub fn member_opt(&self, name: &str) -> Result<Option<Member>, ArgError> {
		let Some(id) = self.int64_opt(name)? else {
			return Ok(None);
		};

		let Some(member) = self.resolved.members.get(&id) else {
			return Err(resolved_missing(name, id, "member"));
		};

		// Member entries in the side table may omit user fields; backfill
		// the username from the resolved user entry when one exists.
		let mut member = member.clone();
		if member.username.is_empty() {
			match self.resolved.users.get(&id) {
				Some(user) => member.username = user.username.clone(),
				None => return Err(resolved_missing(name, id, "user")),
			}
		}

		Ok(Some(member))
	}

	pub fn role(&self, name: &str) -> Result<Role, ArgError> {
		self.role_opt(name)?.ok_or_else(|| missing(name, "role"))
	}

	pub fn role_opt(&self, name: &str) -> Result<Option<Role>, ArgError> {
		let Some(id) = self.int64_opt(name)? else {
			return Ok(None);
		};

		match self.resolved.roles.get(&id) {
			Some(role) => Ok(Some(role.clone())),
			None => Err(resolved_missing(name, id, "role")),
		}
	}

	pub fn channel(&self, name: &str) -> Result<Channel, ArgError> {
		self.channel_opt(name)?.ok_or_else(|| missing(name, "channel"))
	}

	pub fn channel_opt(&self, name: &str) -> Result<Option<Channel>, ArgError> {
		let Some(id) = self.int64_opt(name)? else {
			return Ok(None);
		};

		match self.resolved.channels.get(&id) {
			Some(channel) => Ok(Some(channel.clone())),
			None => Err(resolved_missing(name, id, "channel")),
		}
	}
}

fn missing(name: &str, expected: &'static str) -> ArgError {
	ArgError::MissingOption {
		name: name.to_string(),
		expected,
	}
}

fn mismatch(name: &str, expected: &'static str, got: &'static str) -> ArgError {
	ArgError::OptionTypeMismatch {
		name: name.to_string(),
		expected,
		got,
	}
}

fn resolved_missing(name: &str, id: i64, kind: &'static str) -> ArgError {
	ArgError::ResolvedNotFound {
		name: name.to_string(),
		id,
		kind,
	}
}
