//! ProXplore binary support: bootstrap and the console shell.

pub mod bootstrap;
pub mod shell;
