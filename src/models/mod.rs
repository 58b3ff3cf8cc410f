pub mod anime;
pub mod guess;
pub mod import;
