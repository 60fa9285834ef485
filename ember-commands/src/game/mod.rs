pub mod challenge;
pub mod rps;
