pub mod assertions;
pub mod source_fixtures;
