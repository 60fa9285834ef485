pub mod ask;
pub mod test;
