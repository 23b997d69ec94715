//! Fixed-capacity command table.
//!
//! Commands are kept in registration order and matched by literal prefix: the
//! first entry whose name equals the leading bytes of the input line wins.
//! Nothing is required to follow the name, so a command registered as `"set"`
//! also answers `"settings"`, and an earlier entry shadows any later entry it
//! is a prefix of.
//!
//! # Examples
//!
//! ```rust
//! use libconsole::console::registry::{CommandRegistry, Dispatch};
//!
//! fn reboot(_line: &[u8]) {}
//! fn status(_line: &[u8]) {}
//!
//! let mut registry: CommandRegistry = CommandRegistry::new();
//! registry.register("reboot", reboot).unwrap();
//! registry.register("status", status).unwrap();
//!
//! assert_eq!(registry.find("status -v").map(|c| c.name()), Some("status"));
//! assert_eq!(registry.dispatch("reboot now"), Dispatch::Handled);
//! assert_eq!(registry.dispatch("halt"), Dispatch::Unknown);
//! ```

use core::fmt;

use heapless::Vec;

use super::error::Error;

/// Default maximum number of commands a console can hold.
pub const CONS_MAX_COMMANDS: usize = 16;

/// Plain function command handler.
///
/// Handlers receive the entire raw input line, including the command name,
/// and extract their own arguments (for example with
/// [`parse_args`](super::args::parse_args)). The bytes are passed through as
/// received, without any UTF-8 check. The line must not be retained beyond
/// the call.
pub type CommandFn = fn(&[u8]);

/// A registered command: a name and the handler it triggers.
#[derive(Clone)]
pub struct CommandEntry<'a, H = CommandFn> {
    name: &'a str,
    handler: H,
}

impl<'a, H> CommandEntry<'a, H> {
    /// The name this command is matched by.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The handler invoked when this command matches.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    fn matches(&self, line: &[u8]) -> bool {
        line.starts_with(self.name.as_bytes())
    }
}

impl<H> fmt::Debug for CommandEntry<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEntry")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Result of dispatching one line against the registry.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Dispatch {
    /// The line was empty; nothing was matched.
    Empty,
    /// A command matched and its handler ran.
    Handled,
    /// No registered command matched the line.
    Unknown,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Dispatch {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Dispatch::Empty => defmt::write!(f, "Empty"),
            Dispatch::Handled => defmt::write!(f, "Handled"),
            Dispatch::Unknown => defmt::write!(f, "Unknown"),
        }
    }
}

/// Ordered, bounded table of commands.
///
/// `N` is the capacity; registrations past it are rejected without touching
/// the table. Names are borrowed, not copied, and must outlive the registry.
pub struct CommandRegistry<'a, H = CommandFn, const N: usize = CONS_MAX_COMMANDS> {
    entries: Vec<CommandEntry<'a, H>, N>,
}

impl<'a, H, const N: usize> CommandRegistry<'a, H, N> {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a command to the end of the table.
    ///
    /// No uniqueness check is made: duplicate and overlapping names are
    /// accepted and resolved by registration order at lookup time.
    ///
    /// # Errors
    ///
    /// * [`Error::CapacityExceeded`] - the table already holds `N` commands
    pub fn register(&mut self, name: &'a str, handler: H) -> Result<(), Error> {
        match self.entries.push(CommandEntry { name, handler }) {
            Ok(()) => {
                debug!("registered command {}", name);
                Ok(())
            }
            Err(_) => {
                warn!("command table full, rejected {}", name);
                Err(Error::CapacityExceeded)
            }
        }
    }

    /// Find the first command whose name is a prefix of `line`.
    ///
    /// An empty line never matches. Text and raw bytes are both accepted.
    pub fn find<L: AsRef<[u8]> + ?Sized>(&self, line: &L) -> Option<&CommandEntry<'a, H>> {
        let line = line.as_ref();
        if line.is_empty() {
            return None;
        }
        self.entries.iter().find(|entry| entry.matches(line))
    }

    fn find_mut(&mut self, line: &[u8]) -> Option<&mut CommandEntry<'a, H>> {
        if line.is_empty() {
            return None;
        }
        self.entries.iter_mut().find(|entry| entry.matches(line))
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no command has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the next registration would be rejected.
    pub fn is_full(&self) -> bool {
        self.entries.is_full()
    }

    /// Maximum number of commands this registry can hold.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Registered commands in registration (and therefore match) order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandEntry<'a, H>> {
        self.entries.iter()
    }

    /// Registered command names in match order.
    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }
}

impl<H: FnMut(&[u8]), const N: usize> CommandRegistry<'_, H, N> {
    /// Match `line` and run the handler of the first matching command.
    ///
    /// The handler receives the whole line and runs to completion before
    /// this returns. No output is produced here; reporting the outcome to
    /// the user is up to the caller.
    pub fn dispatch<L: AsRef<[u8]> + ?Sized>(&mut self, line: &L) -> Dispatch {
        let line = line.as_ref();
        if line.is_empty() {
            return Dispatch::Empty;
        }

        match self.find_mut(line) {
            Some(entry) => {
                trace!("dispatching to {}", entry.name);
                (entry.handler)(line);
                Dispatch::Handled
            }
            None => Dispatch::Unknown,
        }
    }
}

impl<H, const N: usize> Default for CommandRegistry<'_, H, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H, const N: usize> fmt::Debug for CommandRegistry<'_, H, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("capacity", &N)
            .field("entries", &self.entries)
            .finish()
    }
}
