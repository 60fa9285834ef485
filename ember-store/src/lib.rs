//! In-memory state stores shared by interaction handlers.
//!
//! Nothing here is persisted: sessions and challenges live for the process
//! lifetime unless an eviction sweep removes them.

/// Pending rock-paper-scissors challenges.
pub mod challenges;
mod keyed;
/// Records fetched from the people API.
pub mod models;
/// Paging state for rendered result lists.
pub mod sessions;

pub use challenges::{Challenge, ChallengeStore};
pub use models::Person;
pub use sessions::{Session, SessionStore};
