//! Client-side harness for the `sol_swap` program.
//!
//! The harness is wired explicitly: a [`ConnectionConfig`] is parsed once at start,
//! turned into an `anchor_client::Client`, and the program is looked up in a
//! [`Workspace`] owned by the caller. The resolved [`ProgramHandle`] is then handed to
//! [`run_initialize_case`].

mod config;
mod error;
mod handle;
mod harness;
mod workspace;

pub use config::ConnectionConfig;
pub use error::ExternalCallError;
pub use handle::{ProgramHandle, SolSwapProgram};
pub use harness::{explorer_url, report, run_initialize_case, run_initialize_case_to};
pub use workspace::{normalize_program_name, Workspace};
