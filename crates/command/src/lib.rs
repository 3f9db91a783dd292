//! Text grammar for vehicle commands.
//!
//! Commands are written `KEYWORD` or `KEYWORD:PARAMETER`, for example
//! `TAKEOFF:10`, `left:3` or `RTL`. Parsing never fails: anything that does
//! not form a valid command becomes `Command::Unknown`.

pub mod command;
pub mod direction;
pub mod parse;

pub use command::{
    Command, DEFAULT_LOITER_SECONDS, DEFAULT_MOVE_DISTANCE, DEFAULT_TAKEOFF_ALTITUDE,
};
pub use direction::Direction;
pub use parse::parse;
