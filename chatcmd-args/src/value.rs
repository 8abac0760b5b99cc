//! The typed value carrier produced by every successful parse.

use std::sync::Arc;

use chatcmd_model::Channel;
use chatcmd_model::Member;
use chatcmd_model::User;

use crate::def::ArgDef;
use crate::types::AdvUserMatch;

/// Closed union over everything an argument parse can produce.
///
/// `None` doubles as "absent": an optional argument that was never supplied
/// keeps its definition's default, which is `None` unless configured.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ArgValue {
	#[default]
	None,
	Int(i64),
	Float(f64),
	Str(String),
	Bool(bool),
	User(User),
	Member(Member),
	Channel(Channel),
	Adv(AdvUserMatch),
}

impl ArgValue {
	pub fn is_none(&self) -> bool {
		matches!(self, ArgValue::None)
	}
}

/// One parsed argument of one invocation: a back-reference to its
/// definition, the value (seeded from the definition's default), and the
/// raw text token it came from, when there was one.
///
/// The accessors are deliberately infallible: a shape mismatch yields the
/// zero value so handler code can read optional arguments without
/// branching on type. Strict rejection happens earlier, inside the parse
/// paths themselves.
#[derive(Debug, Clone)]
pub struct ParsedArg {
	pub def: Arc<ArgDef>,
	pub value: ArgValue,
	pub raw: Option<String>,
}

impl ParsedArg {
	pub fn from_def(def: &Arc<ArgDef>) -> Self {
		Self {
			def: Arc::clone(def),
			value: def.default.clone(),
			raw: None,
		}
	}

	pub fn as_str(&self) -> String {
		match &self.value {
			ArgValue::Str(s) => s.clone(),
			ArgValue::Int(v) => v.to_string(),
			_ => String::new(),
		}
	}

	pub fn as_i64(&self) -> i64 {
		match &self.value {
			ArgValue::Int(v) => *v,
			_ => 0,
		}
	}

	/// Checked narrowing; fails on overflow instead of truncating.
	pub fn as_i32(&self) -> Option<i32> {
		match &self.value {
			ArgValue::Int(v) => i32::try_from(*v).ok(),
			_ => None,
		}
	}

	pub fn as_f64(&self) -> f64 {
		match &self.value {
			ArgValue::Float(v) => *v,
			ArgValue::Int(v) => *v as f64,
			_ => 0.0,
		}
	}

	pub fn as_bool(&self) -> bool {
		match &self.value {
			ArgValue::Bool(b) => *b,
			ArgValue::Int(v) => *v > 0,
			ArgValue::Str(s) => !s.is_empty(),
			_ => false,
		}
	}

	pub fn member(&self) -> Option<Member> {
		match &self.value {
			ArgValue::Member(m) => Some(m.clone()),
			ArgValue::Adv(adv) => adv.member.clone(),
			_ => None,
		}
	}

	pub fn user(&self) -> Option<User> {
		match &self.value {
			ArgValue::User(u) => Some(u.clone()),
			ArgValue::Member(m) => Some(m.user()),
			ArgValue::Adv(adv) => Some(adv.user.clone()),
			_ => None,
		}
	}

	pub fn channel(&self) -> Option<Channel> {
		match &self.value {
			ArgValue::Channel(c) => Some(c.clone()),
			_ => None,
		}
	}

	pub fn adv(&self) -> Option<&AdvUserMatch> {
		match &self.value {
			ArgValue::Adv(adv) => Some(adv),
			_ => None,
		}
	}
}

/// Build the per-invocation result array for a definition list, seeding
/// every slot with its default. Re-parsing always goes through a fresh
/// array; values are never mutated in place.
pub fn new_parsed_args(defs: &[Arc<ArgDef>]) -> Vec<ParsedArg> {
	defs.iter().map(ParsedArg::from_def).collect()
}
