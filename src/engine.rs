//! Rule dispatch and resolution engine.
//!
//! Normalizing one cell is a short, single-pass pipeline:
//!
//! ```text
//! trimmed text ── Shape::scan ──┐                       (trigger.rs)
//!                               │  skip rules whose shape bits are absent
//!                               v
//!                     first_match (dispatch.rs)
//!                       - rules in priority order
//!                       - stop at the first structural match
//!                               │
//!                               v
//!                     rule production
//!                       - calendar parts, or a failure
//!                               │
//!                               v
//!                     resolve (resolve.rs)
//!                       - real calendar date?
//!                       - year inside the range?
//!                               │
//!                               v
//!                 Result<CanonicalDate, NormalizeError>
//! ```
//!
//! There is no backtracking: once a rule matches structurally, its verdict is
//! final even when validation fails. Shape gating only avoids evaluating
//! regexes that cannot match, so it never changes which rule wins.
//!
//! Everything here is pure. Logging happens in the API layer around
//! [`run`], never inside it.

#[path = "engine/dispatch.rs"]
mod dispatch;
#[path = "engine/resolve.rs"]
mod resolve;
#[path = "engine/trigger.rs"]
mod trigger;

pub use dispatch::{RunResult, run};
pub use trigger::Shape;
