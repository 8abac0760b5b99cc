//! # chatcmd-args
//!
//! Argument-resolution core for a chat-command framework: turns untrusted,
//! loosely structured command input into strongly-typed, validated values.
//!
//! Two input shapes feed the same semantic contract:
//!
//! - **text tokens** from a traditional chat message, probed with
//!   [`ArgType::matches`] and parsed with [`ArgType::from_message`];
//! - **structured options** from a slash-command interaction, parsed with
//!   [`ArgType::from_interaction`] through the [`SlashOptions`] adapter.
//!
//! Entity-bearing types resolve against the guild's cached directory, fall
//! back to a live [`chatcmd_model::Session`] fetch when the cache misses,
//! and disambiguate free-text names with a conservative fuzzy scan that
//! reports candidates instead of guessing.
//!
//! ## Example
//!
//! ```rust
//! use chatcmd_args::ArgDef;
//! use chatcmd_args::IntArg;
//!
//! let def = ArgDef::new("count", IntArg::ranged(1, 100)).help("How many to remove");
//! assert!(def.kind.matches(&def, "25"));
//! assert!(!def.kind.matches(&def, "a lot"));
//! ```

mod context;
mod def;
mod error;
mod options;
mod search;
mod types;
mod value;

pub use context::InvocationContext;
pub use def::ArgDef;
pub use def::OptionKind;
pub use def::OptionSpec;
pub use error::ArgError;
pub use options::SlashOptions;
pub use search::DirectoryScan;
pub use search::MemberSearch;
pub use search::find_member_by_name;
pub use types::AdvUserArg;
pub use types::AdvUserMatch;
pub use types::ArgType;
pub use types::ChannelArg;
pub use types::FloatArg;
pub use types::IntArg;
pub use types::StringArg;
pub use types::UserArg;
pub use types::UserIdArg;
pub use value::ArgValue;
pub use value::ParsedArg;
pub use value::new_parsed_args;
