pub mod from_index;
pub mod index;
pub mod list;
pub mod parse;
pub mod preference;
