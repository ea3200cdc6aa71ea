//! authbot - Discord bot that authenticates members on a prefix command
//!
//! A member types `!iam <server> <first> <last>`; the bot renames them to
//! `First Last` and grants the configured role.

pub mod domain;
pub mod application;
pub mod infrastructure;
