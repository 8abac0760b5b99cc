//! Remote-fetch collaborator used when the local directory misses.

use async_trait::async_trait;
use thiserror::Error;

use crate::entity::Member;
use crate::entity::User;

/// Errors surfaced by the transport behind [`Session`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
	/// The platform does not know the requested entity.
	#[error("entity not found")]
	NotFound,

	/// The round trip itself failed.
	#[error("transport error: {0}")]
	Transport(String),
}

/// Blocking-per-call handle to the chat platform, used by the parser as a
/// fallback when the cached directory is stale or incomplete. These are the
/// only suspension points in the parsing core; no timeout or retry is
/// imposed here.
#[async_trait]
pub trait Session: Send + Sync {
	async fn guild_member(&self, guild_id: i64, user_id: i64) -> Result<Member, SessionError>;

	async fn user(&self, user_id: i64) -> Result<User, SessionError>;
}
