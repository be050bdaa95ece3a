// ABOUTME: Configuration and constants for the Mini-LISP interpreter

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const WELCOME_MESSAGE: &str = "Mini-LISP";
pub const WELCOME_SUBTITLE: &str = "a small, statically-typed Lisp dialect";
pub const PROMPT: &str = "mini-lisp> ";
