//! Loading of the plain-text profile table (profile.txt).

pub mod parse;
pub mod row;

pub use parse::{parse_profile_file, parse_profile_str};
pub use row::ProfileRow;
