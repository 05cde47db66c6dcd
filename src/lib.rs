// ABOUTME: Library crate for gitship exposing the session modules for testing
//
// Module responsibilities:
// - `error`: flat fatal error taxonomy for the whole flow
// - `config`: immutable session configuration built from prompts
// - `prompt`: dialoguer-driven interactive collection
// - `deps`: required-tool detection and best-effort installation
// - `github`: blocking GitHub REST client (lookup + create)
// - `git`: local git plumbing via the git binary
// - `readme`: README stub creation and editor hand-off
// - `session`: the linear driver composing the steps

pub mod config;
pub mod deps;
pub mod error;
pub mod git;
pub mod github;
pub mod prompt;
pub mod readme;
pub mod session;
