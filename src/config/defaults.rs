//! Default values of the configurable options.

/// The default bound on recursion, sized so each recursive procedure stays within a 2 MiB thread stack.
pub const RECURSION_LIMIT: usize = 512;

/// The greatest bound on recursion which may be configured.
pub const MAX_RECURSION_LIMIT: usize = 2048;

pub const SYMBOL_LIMIT: usize = 24;
pub const MAX_SYMBOL_LIMIT: usize = 32;
