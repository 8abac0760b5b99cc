//! User, user-id and channel argument resolution from text tokens and
//! interactions.

mod common;

use std::sync::Arc;

use chatcmd_args::ArgDef;
use chatcmd_args::ArgError;
use chatcmd_args::ArgType;
use chatcmd_args::ArgValue;
use chatcmd_args::ChannelArg;
use chatcmd_args::OptionKind;
use chatcmd_args::SlashOptions;
use chatcmd_args::UserArg;
use chatcmd_args::UserIdArg;
use chatcmd_model::Channel;
use chatcmd_model::Interaction;
use chatcmd_model::Member;
use chatcmd_model::OptionValue;
use chatcmd_model::User;
use common::StubSession;
use common::ctx_in_guild;
use common::ctx_with;
use common::guild_with_members;
use common::message_mentioning;
use rstest::rstest;

#[rstest]
#[case("<@123>", 123)]
#[case("<@!123>", 123)]
#[tokio::test]
async fn user_mention_resolves_against_the_message(#[case] token: &str, #[case] id: i64) {
	let def = ArgDef::new("target", UserArg::mention_only());
	let ctx = ctx_with(Arc::new(StubSession::new()))
		.with_message(message_mentioning(&[User::new(123, "alice")]));

	assert!(def.kind.matches(&def, token));
	let value = def.kind.from_message(&def, token, &ctx).await.unwrap();
	assert_eq!(value, ArgValue::User(User::new(id, "alice")));
}

#[rstest]
#[case("<@123")]
#[case("@123>")]
#[case("<@abc>")]
#[tokio::test]
async fn malformed_mentions_are_rejected(#[case] token: &str) {
	let def = ArgDef::new("target", UserArg::mention_only());
	let ctx = ctx_with(Arc::new(StubSession::new()))
		.with_message(message_mentioning(&[User::new(123, "alice")]));

	let err = def.kind.from_message(&def, token, &ctx).await.unwrap_err();
	assert_eq!(err, ArgError::ImproperMention(token.to_string()));
}

#[tokio::test]
async fn mention_of_an_unattached_user_is_improper() {
	let def = ArgDef::new("target", UserArg::mention_only());
	let ctx = ctx_with(Arc::new(StubSession::new()))
		.with_message(message_mentioning(&[User::new(123, "alice")]));

	let err = def
		.kind
		.from_message(&def, "<@999>", &ctx)
		.await
		.unwrap_err();
	assert_eq!(err, ArgError::ImproperMention("<@999>".to_string()));
}

#[tokio::test]
async fn mention_only_mode_never_searches() {
	let def = ArgDef::new("target", UserArg::mention_only());
	let guild = guild_with_members(1, &[Member::new(5, "alice")]);
	let ctx = ctx_in_guild(Arc::new(StubSession::new()), guild);

	assert!(!def.kind.matches(&def, "alice"));
	let err = def.kind.from_message(&def, "alice", &ctx).await.unwrap_err();
	assert_eq!(err, ArgError::ImproperMention("alice".to_string()));
}

#[tokio::test]
async fn search_enabled_user_falls_back_to_the_directory() {
	let def = ArgDef::new("target", UserArg::new());
	let guild = guild_with_members(1, &[Member::new(5, "alice")]);
	let ctx = ctx_in_guild(Arc::new(StubSession::new()), guild);

	assert!(def.kind.matches(&def, "alice"));
	let value = def.kind.from_message(&def, "alice", &ctx).await.unwrap();
	assert_eq!(value, ArgValue::User(User::new(5, "alice")));
}

#[tokio::test]
async fn user_interaction_reads_the_resolved_table() {
	let def = ArgDef::new("target", UserArg::new());
	let ctx = ctx_with(Arc::new(StubSession::new()));

	let mut interaction = Interaction::default();
	interaction.push_option("target", OptionValue::Integer(7));
	interaction.resolved.users.insert(7, User::new(7, "bob"));
	let opts = SlashOptions::from_interaction(&interaction);

	let value = def.kind.from_interaction(&def, &ctx, &opts).await.unwrap();
	assert_eq!(value, ArgValue::User(User::new(7, "bob")));
}

#[tokio::test]
async fn user_id_accepts_bare_ids_without_any_lookup() {
	let def = ArgDef::new("target", UserIdArg);
	let session = Arc::new(StubSession::new());
	// No guild context at all.
	let ctx = ctx_with(Arc::clone(&session));

	assert!(def.kind.matches(&def, "123"));
	let value = def.kind.from_message(&def, "123", &ctx).await.unwrap();
	assert_eq!(value, ArgValue::Int(123));
	assert_eq!(session.call_count(), 0);
}

#[rstest]
#[case("<@123>", 123)]
#[case("<@!456>", 456)]
#[tokio::test]
async fn user_id_extracts_ids_from_mentions(#[case] token: &str, #[case] id: i64) {
	let def = ArgDef::new("target", UserIdArg);
	let ctx = ctx_with(Arc::new(StubSession::new()));

	let value = def.kind.from_message(&def, token, &ctx).await.unwrap();
	assert_eq!(value, ArgValue::Int(id));
}

#[tokio::test]
async fn user_id_interaction_prefers_the_native_user_option() {
	let def = ArgDef::new("target", UserIdArg);
	let ctx = ctx_with(Arc::new(StubSession::new()));

	let mut interaction = Interaction::default();
	interaction.push_option("target", OptionValue::Integer(9));
	interaction.push_option("target-id", OptionValue::String("1000".to_string()));
	interaction.resolved.users.insert(9, User::new(9, "bob"));
	let opts = SlashOptions::from_interaction(&interaction);

	let value = def.kind.from_interaction(&def, &ctx, &opts).await.unwrap();
	assert_eq!(value, ArgValue::Int(9));
}

#[tokio::test]
async fn user_id_interaction_falls_back_to_the_companion_option() {
	let def = ArgDef::new("target", UserIdArg);
	let ctx = ctx_with(Arc::new(StubSession::new()));

	let mut interaction = Interaction::default();
	interaction.push_option("target-id", OptionValue::String("1000".to_string()));
	let opts = SlashOptions::from_interaction(&interaction);

	let value = def.kind.from_interaction(&def, &ctx, &opts).await.unwrap();
	assert_eq!(value, ArgValue::Int(1000));
}

#[test]
fn user_id_registers_both_option_shapes() {
	let def = ArgDef::new("target", UserIdArg);
	let opts = def.kind.slash_options(&def);
	assert_eq!(opts.len(), 2);
	assert_eq!(opts[0].name, "target-id");
	assert_eq!(opts[0].kind, OptionKind::String);
	assert_eq!(opts[1].name, "target");
	assert_eq!(opts[1].kind, OptionKind::User);
}

#[tokio::test]
async fn channel_resolves_mentions_and_bare_ids() {
	let def = ArgDef::new("where", ChannelArg);
	let guild = guild_with_members(1, &[]);
	guild.insert_channel(Channel {
		id: 42,
		name: "general".to_string(),
		guild_id: 1,
	});
	let ctx = ctx_in_guild(Arc::new(StubSession::new()), guild);

	for token in ["<#42>", "42"] {
		assert!(def.kind.matches(&def, token));
		let value = def.kind.from_message(&def, token, &ctx).await.unwrap();
		match value {
			ArgValue::Channel(c) => assert_eq!(c.name, "general"),
			other => panic!("expected channel, got {other:?}"),
		}
	}
}

#[tokio::test]
async fn channel_without_guild_context_is_a_silent_no_op() {
	let def = ArgDef::new("where", ChannelArg);
	let ctx = ctx_with(Arc::new(StubSession::new()));

	let value = def.kind.from_message(&def, "<#42>", &ctx).await.unwrap();
	assert_eq!(value, ArgValue::None);
}

#[tokio::test]
async fn channel_unknown_to_the_directory_fails() {
	let def = ArgDef::new("where", ChannelArg);
	let guild = guild_with_members(1, &[]);
	let ctx = ctx_in_guild(Arc::new(StubSession::new()), guild);

	let err = def
		.kind
		.from_message(&def, "<#42>", &ctx)
		.await
		.unwrap_err();
	assert_eq!(err, ArgError::ImproperMention("<#42>".to_string()));
}

#[tokio::test]
async fn channel_interaction_re_resolves_through_the_directory() {
	let def = ArgDef::new("where", ChannelArg);
	let guild = guild_with_members(1, &[]);
	guild.insert_channel(Channel {
		id: 42,
		name: "general".to_string(),
		guild_id: 1,
	});
	let ctx = ctx_in_guild(Arc::new(StubSession::new()), guild);

	let mut interaction = Interaction::default();
	interaction.push_option("where", OptionValue::Integer(42));
	interaction.resolved.channels.insert(
		42,
		Channel {
			id: 42,
			name: "stale-name".to_string(),
			guild_id: 1,
		},
	);
	let opts = SlashOptions::from_interaction(&interaction);

	let value = def.kind.from_interaction(&def, &ctx, &opts).await.unwrap();
	match value {
		// Local cache wins over the platform snapshot.
		ArgValue::Channel(c) => assert_eq!(c.name, "general"),
		other => panic!("expected channel, got {other:?}"),
	}
}

#[tokio::test]
async fn channel_interaction_missing_locally_is_channel_not_found() {
	let def = ArgDef::new("where", ChannelArg);
	let guild = guild_with_members(1, &[]);
	let ctx = ctx_in_guild(Arc::new(StubSession::new()), guild);

	let mut interaction = Interaction::default();
	interaction.push_option("where", OptionValue::Integer(42));
	interaction.resolved.channels.insert(
		42,
		Channel {
			id: 42,
			name: "ghost".to_string(),
			guild_id: 1,
		},
	);
	let opts = SlashOptions::from_interaction(&interaction);

	let err = def
		.kind
		.from_interaction(&def, &ctx, &opts)
		.await
		.unwrap_err();
	assert_eq!(err, ArgError::ChannelNotFound);
}
