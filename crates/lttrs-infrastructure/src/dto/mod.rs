//! Data Transfer Objects for persistence.
//!
//! DTOs describe the exact file layout; conversion to the domain goes
//! through `SessionRecord`, which the domain re-validates.

mod session;

pub use session::{SESSION_SCHEMA_VERSION, SessionV1_0_0};
