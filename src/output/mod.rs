//! Terminal output formatting
//!
//! Message text, display helpers and pretty-printing for the game front-ends.

pub mod display;
pub mod formatters;
pub mod messages;

pub use display::{
    print_banner, print_outcome, print_rejection, print_round_result, print_round_start,
    print_statistics,
};
