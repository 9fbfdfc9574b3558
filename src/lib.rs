//! Declarative dotfile symlink manager.
//!
//! A TOML document at the root of a dotfiles repository names the files
//! to publish; `dotlink` resolves each one to a symlink destination and
//! creates the links, reporting anything already in the way.
//!
//! The public API is organised into four layers:
//!
//! - **[`config`]** — the nested override document model and its TOML I/O
//! - **[`parser`]** — resolve a [`config::Config`] into a tree of
//!   target/link pairs
//! - **[`linker`]** — evaluate that tree against a [`fs::FileSystem`] and
//!   create symlinks
//! - **[`commands`]** — top-level subcommand orchestration
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod fs;
pub mod linker;
pub mod parser;
