//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use async_trait::async_trait;
use chatcmd_args::InvocationContext;
use chatcmd_model::GuildState;
use chatcmd_model::Member;
use chatcmd_model::Message;
use chatcmd_model::Session;
use chatcmd_model::SessionError;
use chatcmd_model::User;

/// In-memory session double; counts calls so tests can assert which paths
/// stayed off the network.
#[derive(Default)]
pub struct StubSession {
	users: HashMap<i64, User>,
	guild_members: HashMap<(i64, i64), Member>,
	pub calls: AtomicUsize,
}

impl StubSession {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_user(mut self, user: User) -> Self {
		self.users.insert(user.id, user);
		self
	}

	pub fn with_guild_member(mut self, guild_id: i64, member: Member) -> Self {
		self.guild_members.insert((guild_id, member.id), member);
		self
	}

	pub fn call_count(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl Session for StubSession {
	async fn guild_member(&self, guild_id: i64, user_id: i64) -> Result<Member, SessionError> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		self.guild_members
			.get(&(guild_id, user_id))
			.cloned()
			.ok_or(SessionError::NotFound)
	}

	async fn user(&self, user_id: i64) -> Result<User, SessionError> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		self.users
			.get(&user_id)
			.cloned()
			.ok_or(SessionError::NotFound)
	}
}

pub fn guild_with_members(id: i64, members: &[Member]) -> Arc<GuildState> {
	let guild = Arc::new(GuildState::new(id));
	for member in members {
		guild.insert_member(member.clone());
	}
	guild
}

pub fn ctx_with(session: Arc<StubSession>) -> InvocationContext {
	InvocationContext::new(session)
}

pub fn ctx_in_guild(session: Arc<StubSession>, guild: Arc<GuildState>) -> InvocationContext {
	InvocationContext::new(session).with_guild(guild)
}

pub fn message_mentioning(users: &[User]) -> Message {
	Message::with_mentions(users.to_vec())
}
