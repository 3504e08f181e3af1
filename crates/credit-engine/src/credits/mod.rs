//! Per-program credit formulas
//!
//! Each program is assessed independently from the quiz input and the
//! reference tables. WOTC and empowerment zone results then go through
//! [`conflicts::resolve_conflicts`]; R&D and state credits always add.

pub mod conflicts;
pub mod empowerment;
pub mod rd;
pub mod state;
pub mod wotc;

pub use conflicts::{resolve_conflicts, ResolvedCredits};
pub use empowerment::{assess_empowerment, EmpowermentAssessment};
pub use rd::{assess_rd, RdAssessment};
pub use state::{assess_state, StateAssessment};
pub use wotc::{assess_wotc, WotcAssessment};
