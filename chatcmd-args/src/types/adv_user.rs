//! The advanced user argument: mention, id lookup with live-fetch
//! fallback, and fuzzy username search, tried in that order.

use async_trait::async_trait;
use chatcmd_model::Member;
use chatcmd_model::User;
use tracing::debug;

use super::ArgType;
use super::parse_user_mention;
use crate::context::InvocationContext;
use crate::def::ArgDef;
use crate::def::OptionKind;
use crate::def::OptionSpec;
use crate::error::ArgError;
use crate::options::SlashOptions;
use crate::value::ArgValue;

/// A resolved advanced-user match. The user is always present; the member
/// is present only when the target is confirmed to belong to the current
/// guild (always, when membership was required).
#[derive(Debug, Clone, PartialEq)]
pub struct AdvUserMatch {
	pub user: User,
	pub member: Option<Member>,
}

impl AdvUserMatch {
	/// Guild nickname when known, username otherwise.
	pub fn display_name(&self) -> &str {
		if let Some(member) = &self.member {
			if !member.nick.is_empty() {
				return &member.nick;
			}
		}

		&self.user.username
	}
}

#[derive(Debug, Clone, Copy)]
pub struct AdvUserArg {
	/// Accept bare numeric ids.
	pub enable_user_id: bool,
	/// Fall through to the fuzzy username search.
	pub enable_username_search: bool,
	/// Refuse targets that cannot be confirmed as guild members by either
	/// the directory or the live fetch. A strictness toggle, not a hard
	/// rule.
	pub require_membership: bool,
}

impl AdvUserArg {
	/// Ids and search enabled, membership required.
	pub const fn strict() -> Self {
		Self {
			enable_user_id: true,
			enable_username_search: true,
			require_membership: true,
		}
	}

	/// Ids and search enabled, non-members allowed.
	pub const fn lenient() -> Self {
		Self {
			enable_user_id: true,
			enable_username_search: true,
			require_membership: false,
		}
	}

	/// Directory copy first, live `guild_member` fetch on a miss, then
	/// (unless membership is required) a bare `user` fetch.
	async fn search_id(
		&self,
		id: i64,
		ctx: &InvocationContext,
	) -> (Option<Member>, Option<User>) {
		if let Some(guild) = &ctx.guild {
			if let Some(member) = guild.member_copy(id) {
				let user = member.user();
				return (Some(member), Some(user));
			}

			match ctx.session.guild_member(guild.id, id).await {
				Ok(member) => {
					let user = member.user();
					return (Some(member), Some(user));
				}
				Err(err) => debug!(user_id = id, %err, "guild member fetch missed"),
			}
		}

		if self.require_membership {
			return (None, None);
		}

		match ctx.session.user(id).await {
			Ok(user) => (None, Some(user)),
			Err(err) => {
				debug!(user_id = id, %err, "user fetch missed");
				(None, None)
			}
		}
	}

	fn finish(&self, query: &str, member: Option<Member>, user: Option<User>) -> Result<ArgValue, ArgError> {
		let user = match (user, &member) {
			(Some(user), _) => user,
			(None, Some(member)) => member.user(),
			(None, None) => {
				return Err(ArgError::UserNotFound {
					query: query.to_string(),
				});
			}
		};

		if self.require_membership && member.is_none() {
			return Err(ArgError::UserNotFound {
				query: query.to_string(),
			});
		}

		Ok(ArgValue::Adv(AdvUserMatch { user, member }))
	}
}

#[async_trait]
impl ArgType for AdvUserArg {
	fn matches(&self, _def: &ArgDef, part: &str) -> bool {
		if part.starts_with("<@") && part.ends_with('>') {
			return true;
		}

		if self.enable_user_id && part.parse::<i64>().is_ok() {
			return true;
		}

		self.enable_username_search
	}

	async fn from_message(
		&self,
		_def: &ArgDef,
		part: &str,
		ctx: &InvocationContext,
	) -> Result<ArgValue, ArgError> {
		let mut user: Option<User> = None;
		let mut member: Option<Member> = None;

		if part.starts_with("<@") {
			user = parse_user_mention(part).and_then(|id| ctx.mentioned_user(id));
		}

		// An id lookup that found no member already exhausted the fallback
		// chain; do not re-run it for the same id below.
		let mut id_lookup_missed = false;
		if user.is_none() && self.enable_user_id {
			if let Ok(id) = part.parse::<i64>() {
				let (m, u) = self.search_id(id, ctx).await;
				id_lookup_missed = m.is_none();
				member = m;
				user = u;
			}
		}

		if user.is_none() && member.is_none() && self.enable_username_search {
			if let Some(guild) = &ctx.guild {
				member = Some(ctx.search_member(guild, part)?);
			}
		}

		// A mention gave us a user but no membership information yet.
		if member.is_none() && !id_lookup_missed {
			if let Some(u) = &user {
				let (m, fetched) = self.search_id(u.id, ctx).await;
				if m.is_some() {
					member = m;
					if let Some(fetched) = fetched {
						user = Some(fetched);
					}
				}
			}
		}

		self.finish(part, member, user)
	}

	async fn from_interaction(
		&self,
		def: &ArgDef,
		ctx: &InvocationContext,
		opts: &SlashOptions<'_>,
	) -> Result<ArgValue, ArgError> {
		// Native user option first: the platform already resolved both
		// sides of the pair.
		if let Some(user) = opts.user_opt(&def.name)? {
			let member = opts.member_opt(&def.name)?;
			let query = user.username.clone();
			return self.finish(&query, member, Some(user));
		}

		let companion = format!("{}-id", def.name);
		let id = opts.int64(&companion)?;
		let (member, user) = self.search_id(id, ctx).await;
		self.finish(&id.to_string(), member, user)
	}

	fn help_name(&self) -> String {
		let mut out = "User mention".to_string();
		if self.enable_username_search {
			out.push_str("/Name");
		}
		if self.enable_user_id {
			out.push_str("/ID");
		}
		out
	}

	fn slash_options(&self, def: &ArgDef) -> Vec<OptionSpec> {
		let mut id_opt = def.slash_option(OptionKind::Integer);
		id_opt.name = format!("{}-id", id_opt.name);

		vec![def.slash_option(OptionKind::User), id_opt]
	}
}
