/// Small decorative helpers.
pub mod emoji;
/// Interaction replies and the delivery seam shared by gateway and webhook modes.
pub mod interaction;
/// Shared pagination helpers.
pub mod pagination;
/// Pure parser helpers.
pub mod parse;
