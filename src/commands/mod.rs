//! CLI command implementations.
//!
//! One module per subcommand. Handlers take a plain config struct mirroring
//! the CLI flags, build the relevant pipeline, and report results.

pub mod filters;
pub mod lookup;

pub use filters::{run_filters, FiltersConfig};
pub use lookup::{run_lookup, LookupConfig};
