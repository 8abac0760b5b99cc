//! Read-locked guild directory snapshot.
//!
//! The directory is owned by the host's cache layer and mutated by its
//! writers; every reader here takes the read side of the lock and clones
//! entities out before the guard drops, so nothing read-locked escapes the
//! lock's scope.

use std::collections::HashMap;
use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::RwLockReadGuard;

use crate::entity::Channel;
use crate::entity::Member;
use crate::entity::Role;

/// The lock-protected portion of a guild's cached state.
#[derive(Debug, Default)]
pub struct GuildDirectory {
	pub members: HashMap<i64, Member>,
	pub channels: HashMap<i64, Channel>,
	pub roles: HashMap<i64, Role>,
}

/// A guild's cached directory, possibly incomplete: a user can exist on the
/// platform without an entry here, which is what the live-fetch fallback in
/// the parser covers.
#[derive(Debug)]
pub struct GuildState {
	pub id: i64,
	inner: RwLock<GuildDirectory>,
}

impl GuildState {
	pub fn new(id: i64) -> Self {
		Self {
			id,
			inner: RwLock::new(GuildDirectory::default()),
		}
	}

	/// Acquire the read side for a full scan. Callers must not hold the
	/// guard across an await point.
	pub fn read(&self) -> RwLockReadGuard<'_, GuildDirectory> {
		self.inner.read().unwrap_or_else(PoisonError::into_inner)
	}

	/// Point lookup returning an owned copy, safe to retain past the lock.
	pub fn member_copy(&self, id: i64) -> Option<Member> {
		self.read().members.get(&id).cloned()
	}

	pub fn channel_copy(&self, id: i64) -> Option<Channel> {
		self.read().channels.get(&id).cloned()
	}

	pub fn role_copy(&self, id: i64) -> Option<Role> {
		self.read().roles.get(&id).cloned()
	}

	pub fn insert_member(&self, member: Member) {
		self.write().members.insert(member.id, member);
	}

	pub fn insert_channel(&self, channel: Channel) {
		self.write().channels.insert(channel.id, channel);
	}

	pub fn insert_role(&self, role: Role) {
		self.write().roles.insert(role.id, role);
	}

	fn write(&self) -> std::sync::RwLockWriteGuard<'_, GuildDirectory> {
		self.inner.write().unwrap_or_else(PoisonError::into_inner)
	}
}
