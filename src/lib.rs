#[cfg(test)]
#[macro_use]
extern crate assert_matches;
#[macro_use]
extern crate quick_error;

pub mod err;
mod checksum;
pub mod extract;
pub mod layout;
pub mod position;
pub mod route;
pub mod sentence;

pub use err::{ExtractError, RouteError};
pub use extract::extract;
pub use position::Position;
pub use route::{route_from_lines, route_from_log, route_from_reader};
pub use sentence::{decompose, is_valid, validate, DecomposedSentence, ValidSentence};
