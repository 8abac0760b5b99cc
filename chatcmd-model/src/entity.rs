//! Guild entity types shared between the directory cache and the parser.

use serde::Deserialize;
use serde::Serialize;

/// A platform user, not necessarily a member of any guild.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
	pub id: i64,
	pub username: String,
	#[serde(default)]
	pub bot: bool,
}

impl User {
	pub fn new(id: i64, username: impl Into<String>) -> Self {
		Self {
			id,
			username: username.into(),
			bot: false,
		}
	}
}

/// A user's guild-scoped state: identity plus the guild-local nickname and
/// role set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Member {
	pub id: i64,
	pub username: String,
	#[serde(default)]
	pub nick: String,
	#[serde(default)]
	pub roles: Vec<i64>,
}

impl Member {
	pub fn new(id: i64, username: impl Into<String>) -> Self {
		Self {
			id,
			username: username.into(),
			nick: String::new(),
			roles: Vec::new(),
		}
	}

	pub fn with_nick(mut self, nick: impl Into<String>) -> Self {
		self.nick = nick.into();
		self
	}

	/// Project the guild-independent user out of this member.
	pub fn user(&self) -> User {
		User {
			id: self.id,
			username: self.username.clone(),
			bot: false,
		}
	}

	/// Nickname when one is set, username otherwise.
	pub fn display_name(&self) -> &str {
		if self.nick.is_empty() {
			&self.username
		} else {
			&self.nick
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Role {
	pub id: i64,
	pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Channel {
	pub id: i64,
	pub name: String,
	#[serde(default)]
	pub guild_id: i64,
}

/// The slice of a trigger message the argument parser cares about: the
/// mention list the platform attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Message {
	#[serde(default)]
	pub mentions: Vec<User>,
}

impl Message {
	pub fn with_mentions(mentions: Vec<User>) -> Self {
		Self { mentions }
	}
}
