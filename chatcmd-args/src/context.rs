//! Per-invocation shared context handed to every parse path.

use std::sync::Arc;

use chatcmd_model::GuildState;
use chatcmd_model::Member;
use chatcmd_model::Message;
use chatcmd_model::Session;
use chatcmd_model::User;

use crate::error::ArgError;
use crate::search::DirectoryScan;
use crate::search::MemberSearch;

/// Everything one command invocation exposes to argument parsing: the
/// guild (when the trigger happened inside one), the trigger message's
/// mention list (text path only), the live session for fallback fetches,
/// and an optional member-search override.
///
/// Built once per invocation and shared read-only; argument types hold no
/// state of their own across invocations.
pub struct InvocationContext {
	pub guild: Option<Arc<GuildState>>,
	pub message: Option<Message>,
	pub session: Arc<dyn Session>,
	pub member_search: Option<Arc<dyn MemberSearch>>,
}

impl InvocationContext {
	pub fn new(session: Arc<dyn Session>) -> Self {
		Self {
			guild: None,
			message: None,
			session,
			member_search: None,
		}
	}

	pub fn with_guild(mut self, guild: Arc<GuildState>) -> Self {
		self.guild = Some(guild);
		self
	}

	pub fn with_message(mut self, message: Message) -> Self {
		self.message = Some(message);
		self
	}

	pub fn with_member_search(mut self, search: Arc<dyn MemberSearch>) -> Self {
		self.member_search = Some(search);
		self
	}

	/// Run the configured member search, defaulting to the linear
	/// directory scan.
	pub fn search_member(&self, guild: &GuildState, query: &str) -> Result<Member, ArgError> {
		match &self.member_search {
			Some(search) => search.search(guild, query),
			None => DirectoryScan.search(guild, query),
		}
	}

	/// Look a user id up in the trigger message's attached mention list.
	pub(crate) fn mentioned_user(&self, id: i64) -> Option<User> {
		self.message
			.as_ref()?
			.mentions
			.iter()
			.find(|u| u.id == id)
			.cloned()
	}
}
