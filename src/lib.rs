#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
mod coord;
mod game;
mod ship;
#[cfg(feature = "std")]
mod cli;
#[cfg(feature = "std")]
mod console;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use cli::*;
#[cfg(feature = "std")]
pub use console::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_env};
