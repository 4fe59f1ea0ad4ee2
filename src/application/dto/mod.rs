pub mod id;
pub mod profile;
