//! Line-oriented command console for a UART.
//!
//! The console pulls one line at a time from a [`Uart`], matches it against a
//! fixed table of commands, runs the matching handler and prints the next
//! prompt. It has no line editing, history or completion: framing and echo are
//! left to the channel.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │      UART       │───▶│   Line Buffer   │───▶│   Command       │
//! │   (receive)     │    │   (256 bytes)   │    │   Registry      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!          ▲                                             │
//!          │                                             ▼
//! ┌─────────────────┐                           ┌─────────────────┐
//! │  Prompt / Error │◀──────────────────────────│    Handler      │
//! │   (transmit)    │                           │  (raw line in)  │
//! └─────────────────┘                           └─────────────────┘
//! ```
//!
//! # Output protocol
//!
//! - The prompt is `"> "` with no line terminator.
//! - A line that matches nothing produces `"Unknown command: "`, the line
//!   itself byte for byte and `"\r\n"`, followed by the prompt.
//! - An empty line produces just the prompt.
//!
//! # Usage Examples
//!
//! ```rust
//! use libconsole::console::{Console, Dispatch};
//! use libconsole::uart::Uart;
//!
//! struct Serial {
//!     input: &'static [u8],
//!     output: heapless::Vec<u8, 128>,
//! }
//!
//! impl Uart for Serial {
//!     type Error = ();
//!
//!     fn is_initialized(&self) -> bool {
//!         true
//!     }
//!
//!     fn transmit(&mut self, data: &[u8]) -> Result<(), Self::Error> {
//!         self.output.extend_from_slice(data)
//!     }
//!
//!     fn receive(&mut self, buffer: &mut [u8]) -> Result<usize, Self::Error> {
//!         buffer[..self.input.len()].copy_from_slice(self.input);
//!         Ok(self.input.len())
//!     }
//! }
//!
//! fn led(line: &[u8]) {
//!     let mut args = libconsole::console::args::Args::new(line);
//!     let _pin = args.next().and_then(|arg| arg.value());
//! }
//!
//! let serial = Serial { input: b"led -p 13", output: heapless::Vec::new() };
//! let mut console: Console<_> = Console::new(serial);
//! console.register("led", led).unwrap();
//! console.init().unwrap();
//!
//! assert_eq!(console.run_once(), Ok(Dispatch::Handled));
//! assert_eq!(console.uart().output.as_slice(), b"> > ");
//! ```

#![deny(unsafe_code)]

use core::fmt;

#[cfg(feature = "async")]
use crate::uart::AsyncUart;
use crate::uart::Uart;

/// Flag tokenizer for command handlers.
pub mod args;

/// Error and status types for console operations
pub mod error;

/// Command table and prefix matching.
pub mod registry;


pub use args::{ArgPair, Args, NO_VALUE, collect_args, parse_args};
pub use error::{Error, Status};
pub use registry::{CONS_MAX_COMMANDS, CommandEntry, CommandFn, CommandRegistry, Dispatch};

/// Size of the receive buffer; longer lines are cut by the channel.
pub const LINE_BUFFER_SIZE: usize = 256;

/// Default prompt, sent after every processed line.
pub const PROMPT: &str = "> ";

/// Text sent before an unrecognised line is echoed back.
pub const UNKNOWN_COMMAND: &str = "Unknown command: ";

/// Terminator sent after an unrecognised line.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Run-time statistics, cleared by [`Console::init`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counters {
    /// Lines dispatched, empty ones included.
    pub lines: u32,
    /// Lines that ran a command handler.
    pub handled: u32,
    /// Lines that matched no command.
    pub unknown: u32,
    /// Empty lines.
    pub empty: u32,
}

impl Counters {
    fn record(&mut self, outcome: Dispatch) {
        self.lines = self.lines.wrapping_add(1);
        let slot = match outcome {
            Dispatch::Empty => &mut self.empty,
            Dispatch::Handled => &mut self.handled,
            Dispatch::Unknown => &mut self.unknown,
        };
        *slot = slot.wrapping_add(1);
    }
}

/// The console: a command registry bound to a UART.
///
/// `H` is the handler type ([`CommandFn`] unless closures are wanted) and `N`
/// the command capacity.
pub struct Console<'a, U, H = CommandFn, const N: usize = CONS_MAX_COMMANDS> {
    uart: U,
    registry: CommandRegistry<'a, H, N>,
    buffer: [u8; LINE_BUFFER_SIZE],
    prompt: &'a str,
    counters: Counters,
    started: bool,
}

impl<'a, U, H, const N: usize> Console<'a, U, H, N> {
    /// Create a console over `uart` with an empty command table.
    ///
    /// Nothing is sent until [`init`](Self::init) is called.
    pub fn new(uart: U) -> Self {
        Self {
            uart,
            registry: CommandRegistry::new(),
            buffer: [0; LINE_BUFFER_SIZE],
            prompt: PROMPT,
            counters: Counters::default(),
            started: false,
        }
    }

    /// Register a command.
    ///
    /// Commands are matched in registration order by literal prefix, see
    /// [`CommandRegistry`].
    ///
    /// # Errors
    ///
    /// * [`Error::CapacityExceeded`] - `N` commands are already registered
    pub fn register(&mut self, name: &'a str, handler: H) -> Result<(), Error> {
        self.registry.register(name, handler)
    }

    /// Replace the prompt text. An empty prompt suppresses the prompt.
    pub fn set_prompt(&mut self, prompt: &'a str) {
        self.prompt = prompt;
    }

    /// The command table.
    pub fn registry(&self) -> &CommandRegistry<'a, H, N> {
        &self.registry
    }

    /// Statistics since the last successful [`init`](Self::init).
    pub fn counters(&self) -> Counters {
        self.counters
    }

    /// Whether [`init`](Self::init) has succeeded.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Shared access to the channel.
    pub fn uart(&self) -> &U {
        &self.uart
    }

    /// Exclusive access to the channel.
    pub fn uart_mut(&mut self) -> &mut U {
        &mut self.uart
    }

    /// Give the channel back, dropping the command table.
    pub fn release(self) -> U {
        self.uart
    }
}

impl<'a, U: Uart, H, const N: usize> Console<'a, U, H, N> {
    /// Start the console and send the first prompt.
    ///
    /// Clears the run-time [`Counters`]; registered commands are kept.
    ///
    /// # Errors
    ///
    /// * [`Error::ChannelNotReady`] - the UART is not initialized; the console
    ///   stays stopped and nothing is sent
    /// * [`Error::TransmitError`] - the first prompt could not be sent
    pub fn init(&mut self) -> Result<(), Error> {
        if !self.uart.is_initialized() {
            warn!("uart not initialized");
            return Err(Error::ChannelNotReady);
        }

        self.counters = Counters::default();
        send(&mut self.uart, self.prompt.as_bytes())?;
        self.started = true;
        info!("console started with {} commands", self.registry.len());
        Ok(())
    }

    /// Send `text` to the channel as-is.
    ///
    /// Returns [`Status::Empty`] without touching the channel when `text` is
    /// empty.
    ///
    /// # Errors
    ///
    /// * [`Error::TransmitError`] - the channel refused the bytes
    pub fn print(&mut self, text: &str) -> Result<Status, Error> {
        send(&mut self.uart, text.as_bytes())
    }

    /// Send the prompt.
    pub fn prompt(&mut self) -> Result<Status, Error> {
        send(&mut self.uart, self.prompt.as_bytes())
    }
}

impl<'a, U: Uart, H: FnMut(&[u8]), const N: usize> Console<'a, U, H, N> {
    /// Receive one line and dispatch it.
    ///
    /// Blocks for as long as the channel's `receive` does. A line that matches
    /// no command is reported to the user and still counts as success.
    ///
    /// # Errors
    ///
    /// * [`Error::ChannelError`] - receiving failed; nothing was dispatched or
    ///   sent
    /// * [`Error::TransmitError`] - the line was dispatched but the reply or
    ///   prompt could not be sent
    pub fn run_once(&mut self) -> Result<Dispatch, Error> {
        let len = self.uart.receive(&mut self.buffer).map_err(|_| {
            warn!("uart receive failed");
            Error::ChannelError
        })?;

        let line = frame_line(&self.buffer, len);
        let outcome = self.registry.dispatch(line);
        self.counters.record(outcome);
        reply(&mut self.uart, self.prompt, outcome, line)?;
        Ok(outcome)
    }

    /// Dispatch a line that has already been received.
    ///
    /// Same matching and output as [`run_once`](Self::run_once), for hosts
    /// that frame lines themselves. Text and raw bytes are both accepted.
    pub fn process_line<L>(&mut self, line: &L) -> Result<Dispatch, Error>
    where
        L: AsRef<[u8]> + ?Sized,
    {
        let line = line.as_ref();
        let outcome = self.registry.dispatch(line);
        self.counters.record(outcome);
        reply(&mut self.uart, self.prompt, outcome, line)?;
        Ok(outcome)
    }
}

#[cfg(feature = "async")]
impl<'a, U: AsyncUart, H, const N: usize> Console<'a, U, H, N> {
    /// Asynchronous [`init`](Self::init).
    pub async fn init_async(&mut self) -> Result<(), Error> {
        if !self.uart.is_initialized() {
            warn!("uart not initialized");
            return Err(Error::ChannelNotReady);
        }

        self.counters = Counters::default();
        send_async(&mut self.uart, self.prompt.as_bytes()).await?;
        self.started = true;
        info!("console started with {} commands", self.registry.len());
        Ok(())
    }

    /// Asynchronous [`print`](Self::print).
    pub async fn print_async(&mut self, text: &str) -> Result<Status, Error> {
        send_async(&mut self.uart, text.as_bytes()).await
    }

    /// Asynchronous [`prompt`](Self::prompt).
    pub async fn prompt_async(&mut self) -> Result<Status, Error> {
        send_async(&mut self.uart, self.prompt.as_bytes()).await
    }
}

#[cfg(feature = "async")]
impl<'a, U: AsyncUart, H: FnMut(&[u8]), const N: usize> Console<'a, U, H, N> {
    /// Asynchronous [`run_once`](Self::run_once).
    ///
    /// Handlers still run synchronously on the awaiting task.
    pub async fn run_once_async(&mut self) -> Result<Dispatch, Error> {
        let len = self.uart.receive(&mut self.buffer).await.map_err(|_| {
            warn!("uart receive failed");
            Error::ChannelError
        })?;

        let line = frame_line(&self.buffer, len);
        let outcome = self.registry.dispatch(line);
        self.counters.record(outcome);
        reply_async(&mut self.uart, self.prompt, outcome, line).await?;
        Ok(outcome)
    }
}

impl<U, H, const N: usize> fmt::Debug for Console<'_, U, H, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("registry", &self.registry)
            .field("prompt", &self.prompt)
            .field("counters", &self.counters)
            .field("started", &self.started)
            .finish_non_exhaustive()
    }
}

/// Cut the received bytes down to the line proper.
///
/// The line ends at `len` or at the first NUL, whichever comes first. The
/// bytes themselves are not inspected any further.
fn frame_line(buffer: &[u8], len: usize) -> &[u8] {
    let bytes = &buffer[..len.min(buffer.len())];
    match bytes.iter().position(|&b| b == 0) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

fn send<U: Uart>(uart: &mut U, bytes: &[u8]) -> Result<Status, Error> {
    if bytes.is_empty() {
        return Ok(Status::Empty);
    }

    uart.transmit(bytes).map_err(|_| {
        warn!("uart transmit failed");
        Error::TransmitError
    })?;
    Ok(Status::Sent)
}

#[cfg(feature = "async")]
async fn send_async<U: AsyncUart>(uart: &mut U, bytes: &[u8]) -> Result<Status, Error> {
    if bytes.is_empty() {
        return Ok(Status::Empty);
    }

    uart.transmit(bytes).await.map_err(|_| {
        warn!("uart transmit failed");
        Error::TransmitError
    })?;
    Ok(Status::Sent)
}

/// Report the outcome of a dispatch and prompt for the next line.
fn reply<U: Uart>(
    uart: &mut U,
    prompt: &str,
    outcome: Dispatch,
    line: &[u8],
) -> Result<(), Error> {
    if outcome == Dispatch::Unknown {
        debug!("unknown command: {=[u8]:a}", line);
        send(uart, UNKNOWN_COMMAND.as_bytes())?;
        send(uart, line)?;
        send(uart, LINE_TERMINATOR.as_bytes())?;
    }
    send(uart, prompt.as_bytes())?;
    Ok(())
}

#[cfg(feature = "async")]
async fn reply_async<U: AsyncUart>(
    uart: &mut U,
    prompt: &str,
    outcome: Dispatch,
    line: &[u8],
) -> Result<(), Error> {
    if outcome == Dispatch::Unknown {
        debug!("unknown command: {=[u8]:a}", line);
        send_async(uart, UNKNOWN_COMMAND.as_bytes()).await?;
        send_async(uart, line).await?;
        send_async(uart, LINE_TERMINATOR.as_bytes()).await?;
    }
    send_async(uart, prompt.as_bytes()).await?;
    Ok(())
}
