//! End-to-end wiring: declare definitions, parse a text invocation, then
//! parse the same command arriving as a slash-command interaction.
//!
//! Run with: cargo run --example basic

use std::sync::Arc;

use async_trait::async_trait;
use chatcmd_args::ArgDef;
use chatcmd_args::IntArg;
use chatcmd_args::InvocationContext;
use chatcmd_args::SlashOptions;
use chatcmd_args::StringArg;
use chatcmd_args::UserArg;
use chatcmd_args::new_parsed_args;
use chatcmd_model::GuildState;
use chatcmd_model::Interaction;
use chatcmd_model::Member;
use chatcmd_model::Message;
use chatcmd_model::OptionValue;
use chatcmd_model::Session;
use chatcmd_model::SessionError;
use chatcmd_model::User;

/// A session with no backing platform; every remote fetch misses.
struct OfflineSession;

#[async_trait]
impl Session for OfflineSession {
	async fn guild_member(&self, _guild_id: i64, _user_id: i64) -> Result<Member, SessionError> {
		Err(SessionError::NotFound)
	}

	async fn user(&self, _user_id: i64) -> Result<User, SessionError> {
		Err(SessionError::NotFound)
	}
}

#[tokio::main]
async fn main() {
	chatcmd_telemetry::init();

	let guild = Arc::new(GuildState::new(1));
	guild.insert_member(Member::new(200, "alice"));

	let defs = vec![
		Arc::new(ArgDef::new("target", UserArg::new()).help("Who to warn")),
		Arc::new(ArgDef::new("count", IntArg::ranged(1, 10)).help("How many warnings")),
		Arc::new(ArgDef::new("reason", StringArg).help("Why")),
	];

	// Text invocation: "!warn @alice 3 spamming".
	let ctx = InvocationContext::new(Arc::new(OfflineSession))
		.with_guild(Arc::clone(&guild))
		.with_message(Message::with_mentions(vec![User::new(200, "alice")]));

	let tokens = ["<@200>", "3", "spamming"];
	let mut parsed = new_parsed_args(&defs);
	for (slot, token) in parsed.iter_mut().zip(tokens) {
		let def = Arc::clone(&slot.def);
		assert!(def.kind.matches(&def, token));
		slot.value = def
			.kind
			.from_message(&def, token, &ctx)
			.await
			.expect("token should parse");
		slot.raw = Some(token.to_string());
	}

	tracing::info!(
		target_user = ?parsed[0].user().map(|u| u.username),
		count = parsed[1].as_i64(),
		reason = %parsed[2].as_str(),
		"parsed from message"
	);

	// The same command as a slash-command interaction.
	let mut interaction = Interaction::default();
	interaction.push_option("target", OptionValue::Integer(200));
	interaction.push_option("count", OptionValue::Integer(3));
	interaction.push_option("reason", OptionValue::String("spamming".to_string()));
	interaction.resolved.users.insert(200, User::new(200, "alice"));

	let opts = SlashOptions::from_interaction(&interaction);
	let mut parsed = new_parsed_args(&defs);
	for slot in parsed.iter_mut() {
		let def = Arc::clone(&slot.def);
		slot.value = def
			.kind
			.from_interaction(&def, &ctx, &opts)
			.await
			.expect("option should parse");
	}

	tracing::info!(
		target_user = ?parsed[0].user().map(|u| u.username),
		count = parsed[1].as_i64(),
		reason = %parsed[2].as_str(),
		"parsed from interaction"
	);

	// What the help generator and command registry would see.
	for def in &defs {
		for opt in def.kind.slash_options(def) {
			tracing::info!(
				name = %opt.name,
				kind = ?opt.kind,
				help = %def.kind.help_name(),
				"registered option"
			);
		}
	}
}
