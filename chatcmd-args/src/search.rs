//! Fuzzy username/nickname resolution against the guild directory.
//!
//! A single linear scan under the directory's read lock, bounded to five
//! full and five partial matches. The policy is conservative: anything
//! short of one unambiguous full match becomes an actionable error listing
//! the candidates, never a guess.

use chatcmd_model::GuildState;
use chatcmd_model::Member;
use tracing::debug;

use crate::error::ArgError;

/// Pluggable search strategy. Hosts with an indexed or remote member search
/// can swap this in on the invocation context without changing caller
/// semantics.
pub trait MemberSearch: Send + Sync {
	fn search(&self, guild: &GuildState, query: &str) -> Result<Member, ArgError>;
}

/// The default strategy: [`find_member_by_name`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryScan;

impl MemberSearch for DirectoryScan {
	fn search(&self, guild: &GuildState, query: &str) -> Result<Member, ArgError> {
		find_member_by_name(guild, query)
	}
}

/// Scan the guild's member directory for `query`.
///
/// Full matches are case-insensitive equality against username or nickname,
/// capped at five with an early exit; partial matches are case-insensitive
/// substring containment against the username only, capped at five. The
/// unique full match is deep-copied out of the directory so it stays valid
/// past the lock. Any partial matches alongside a full match keep the
/// result ambiguous.
pub fn find_member_by_name(guild: &GuildState, query: &str) -> Result<Member, ArgError> {
	let lowered = query.to_lowercase();

	let mut full: Vec<Member> = Vec::new();
	let mut partial: Vec<String> = Vec::new();

	{
		let dir = guild.read();
		for member in dir.members.values() {
			if member.username.is_empty() {
				continue;
			}

			let full_hit = member.username.to_lowercase() == lowered
				|| (!member.nick.is_empty() && member.nick.to_lowercase() == lowered);

			if full_hit {
				full.push(member.clone());
				if full.len() >= 5 {
					break;
				}
			} else if partial.len() < 5 && member.username.to_lowercase().contains(&lowered) {
				partial.push(member.username.clone());
			}
		}
	}

	debug!(
		query,
		full = full.len(),
		partial = partial.len(),
		"member name scan"
	);

	if full.len() == 1 && partial.is_empty() {
		return Ok(full.into_iter().next().unwrap_or_default());
	}

	if full.is_empty() && partial.is_empty() {
		return Err(ArgError::UserNotFound {
			query: query.to_string(),
		});
	}

	if full.len() > 1 {
		return Err(ArgError::MultipleMatches {
			candidates: full.into_iter().map(|m| m.username).collect(),
		});
	}

	// Full matches first, then partials.
	let mut candidates: Vec<String> = full.into_iter().map(|m| m.username).collect();
	candidates.extend(partial);

	Err(ArgError::DidYouMean { candidates })
}
