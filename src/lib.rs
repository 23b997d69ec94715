//! # libconsole - UART command console
//!
//! A small command interpreter for embedded devices that talk to a user over a
//! serial link. It reads a line from the UART, matches it against a fixed
//! table of commands, runs the matching handler and prompts again. Handlers can
//! pull `-x value` flags out of their line with the bundled tokenizer.
//!
//! ## Features
//!
//! - **Zero-allocation**: fixed-capacity command table and line buffer
//! - **Transport-agnostic**: anything implementing [`uart::Uart`] can drive it
//! - **Prefix dispatch**: first registered command whose name starts the line wins
//! - **Flag parsing**: `-a 5 -b` style short flags with optional integer values
//!
//! ## Usage
//!
//! ```rust,no_run
//! use libconsole::console::{Console, parse_args, ArgPair, NO_VALUE};
//! # use libconsole::uart::Uart;
//! # struct Usart1;
//! # impl Uart for Usart1 {
//! #     type Error = ();
//! #     fn is_initialized(&self) -> bool { true }
//! #     fn transmit(&mut self, _data: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn receive(&mut self, _buffer: &mut [u8]) -> Result<usize, Self::Error> { Ok(0) }
//! # }
//!
//! fn motor(line: &[u8]) {
//!     let mut args = [ArgPair { flag: '\0', value: NO_VALUE }; 4];
//!     let count = parse_args(line, &mut args, 4);
//!     for arg in &args[..count] {
//!         // drive the motor from arg.flag / arg.value()
//!     }
//! }
//!
//! let mut console: Console<_> = Console::new(Usart1);
//! console.register("motor", motor).unwrap();
//! console.init().unwrap();
//!
//! loop {
//!     if console.run_once().is_err() {
//!         // receive or transmit failed; retry on the next cycle
//!     }
//! }
//! ```
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `async`: Enable the [`uart::AsyncUart`] channel and async console operations
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

// Must come first so the logging macros are visible to the other modules.
mod fmt;

/// UART channel abstraction consumed by the console.
///
/// Defines the blocking [`uart::Uart`] trait and, with the `async` feature,
/// its asynchronous counterpart.
pub mod uart;

/// Command console: registry, line dispatch and flag parsing.
pub mod console;

pub use console::{Console, Error};
