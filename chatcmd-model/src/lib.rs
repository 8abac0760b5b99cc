//! # chatcmd-model
//!
//! Entity and payload model consumed by the chatcmd argument-resolution core.
//!
//! This crate owns the data shapes that the argument parser reads but does not
//! own: guild entities ([`User`], [`Member`], [`Role`], [`Channel`]), the
//! read-locked directory snapshot ([`GuildState`]), the remote-fetch
//! collaborator ([`Session`]) and the minimal slash-command interaction
//! payload ([`Interaction`] with its resolved side tables).
//!
//! ## Example
//!
//! ```rust
//! use chatcmd_model::GuildState;
//! use chatcmd_model::Member;
//!
//! let guild = GuildState::new(1);
//! guild.insert_member(Member::new(10, "alice"));
//! assert_eq!(guild.member_copy(10).unwrap().username, "alice");
//! ```

mod entity;
mod guild;
mod interaction;
mod session;

pub use entity::Channel;
pub use entity::Member;
pub use entity::Message;
pub use entity::Role;
pub use entity::User;
pub use guild::GuildDirectory;
pub use guild::GuildState;
pub use interaction::Interaction;
pub use interaction::InteractionOption;
pub use interaction::OptionValue;
pub use interaction::ResolvedData;
pub use session::Session;
pub use session::SessionError;
