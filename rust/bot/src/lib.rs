//! # holdem-bot: Chat-Command Coordination for the Hold'em Engine
//!
//! Thin glue between a chat host and [`holdem_engine`]. One chat room owns
//! one game session; every chat command maps to exactly one engine
//! operation and returns the reply text to post back to the room. The
//! collaborators the engine needs - where tokens live, how private
//! messages reach a player, where finished hands are archived - are
//! injected as traits so the same bot runs against any platform and any
//! storage.
//!
//! ## Modules
//!
//! - [`commands`] - The [`commands::PokerBot`] command surface
//! - [`store`] - Room-to-session repository
//! - [`bank`] - Token balances keyed by (room, participant)
//! - [`messenger`] - Private message delivery capability
//! - [`history`] - Showdown archive and win/loss rankings
//! - [`settings`] - Table stakes and starting balance configuration
//! - [`logging`] - tracing-subscriber bootstrap
//! - [`errors`] - Command-level error types

pub mod bank;
pub mod commands;
pub mod errors;
pub mod history;
pub mod logging;
pub mod messenger;
pub mod settings;
pub mod store;
