//! Host-side session glue: the mutable per-student record and the
//! parse-and-compare verdict shown after a revealed solution.

mod state;
pub mod verification;

pub use state::{SessionState, DEFAULT_NAME};
pub use verification::{verify_final_step, Verdict};
