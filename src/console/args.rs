//! Unix-style short flag extraction.
//!
//! Handlers receive the raw command line. The tokenizer here pulls
//! `-x [value]` pairs out of it without allocating:
//!
//! ```text
//! led -p 13 -s 1      ->  [('p', 13), ('s', 1)]
//! log -v -n 20        ->  [('v', NO_VALUE), ('n', 20)]
//! fan set -d 40 fast  ->  [('d', 40)]
//! ```
//!
//! Rules, applied left to right:
//!
//! - Spaces and tabs separate tokens.
//! - `-` followed by any byte other than a space or tab starts a flag; that
//!   byte is the flag letter. A lone trailing `-` is not a flag.
//! - After the letter (and any spaces or tabs), a base-10 integer is read
//!   unless the next byte is another `-`. If no digits are found the flag gets
//!   [`NO_VALUE`]. Negative values therefore cannot be given with a space
//!   after the flag (`-t -5` is flag `t` without value, then flag `5`).
//! - Any other token is skipped.

use heapless::Vec;

/// Sentinel stored in [`ArgPair::value`] when a flag carries no number.
pub const NO_VALUE: i32 = i32::MIN;

/// A flag letter and its optional numeric value.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ArgPair {
    /// The flag letter (the byte right after `-`).
    pub flag: char,
    /// The parsed value, or [`NO_VALUE`].
    pub value: i32,
}

impl ArgPair {
    /// The value, or `None` when the flag was given without one.
    pub fn value(&self) -> Option<i32> {
        (self.value != NO_VALUE).then_some(self.value)
    }

    /// Whether a number followed the flag.
    pub fn has_value(&self) -> bool {
        self.value != NO_VALUE
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ArgPair {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "-{} {}", self.flag, self.value)
    }
}

/// Lazy iterator over the flags of a command line.
///
/// # Examples
///
/// ```rust
/// use libconsole::console::args::{Args, NO_VALUE};
///
/// let mut args = Args::new("blink -p 13 -f");
/// assert_eq!(args.next().map(|a| (a.flag, a.value)), Some(('p', 13)));
/// assert_eq!(args.next().map(|a| (a.flag, a.value)), Some(('f', NO_VALUE)));
/// assert_eq!(args.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Args<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Args<'a> {
    /// Start scanning `line` from its first byte.
    ///
    /// Accepts the raw bytes a handler receives as well as text.
    pub fn new<L: AsRef<[u8]> + ?Sized>(line: &'a L) -> Self {
        Self {
            bytes: line.as_ref(),
            pos: 0,
        }
    }

    fn peek(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn skip_blanks(&mut self) {
        while matches!(self.peek(0), Some(b) if is_blank(b)) {
            self.pos += 1;
        }
    }

    fn skip_token(&mut self) {
        while matches!(self.peek(0), Some(b) if !is_blank(b)) {
            self.pos += 1;
        }
    }

    /// Parse a value at the cursor. The cursor only moves if digits were read.
    fn value(&mut self) -> i32 {
        match self.peek(0) {
            Some(b'-') | None => NO_VALUE,
            Some(_) => match parse_i32(&self.bytes[self.pos..]) {
                Some((value, consumed)) => {
                    self.pos += consumed;
                    value
                }
                None => NO_VALUE,
            },
        }
    }
}

impl Iterator for Args<'_> {
    type Item = ArgPair;

    fn next(&mut self) -> Option<ArgPair> {
        while self.pos < self.bytes.len() {
            self.skip_blanks();

            match (self.peek(0), self.peek(1)) {
                (Some(b'-'), Some(letter)) if !is_blank(letter) => {
                    self.pos += 2;
                    self.skip_blanks();
                    let value = self.value();
                    return Some(ArgPair {
                        flag: letter as char,
                        value,
                    });
                }
                _ => self.skip_token(),
            }
        }
        None
    }
}

/// Extract flags from `line` into `out`.
///
/// At most `max_args` pairs are written, and never more than `out.len()`.
/// Returns the number of pairs written; the rest of `out` is left untouched.
///
/// # Examples
///
/// ```rust
/// use libconsole::console::args::{parse_args, ArgPair, NO_VALUE};
///
/// let mut out = [ArgPair { flag: '\0', value: 0 }; 4];
/// let count = parse_args("-a 5 -b", &mut out, 4);
///
/// assert_eq!(count, 2);
/// assert_eq!(out[0], ArgPair { flag: 'a', value: 5 });
/// assert_eq!(out[1], ArgPair { flag: 'b', value: NO_VALUE });
/// ```
pub fn parse_args<L: AsRef<[u8]> + ?Sized>(
    line: &L,
    out: &mut [ArgPair],
    max_args: usize,
) -> usize {
    let mut count = 0;
    for (slot, pair) in out.iter_mut().take(max_args).zip(Args::new(line)) {
        *slot = pair;
        count += 1;
    }
    count
}

/// Extract up to `M` flags from `line` into a fixed-capacity vector.
pub fn collect_args<const M: usize>(line: &(impl AsRef<[u8]> + ?Sized)) -> Vec<ArgPair, M> {
    Args::new(line).take(M).collect()
}

fn is_blank(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}

/// Base-10 integer in the manner of C `strtol` on a 32-bit target.
///
/// Leading whitespace and one sign are accepted; parsing stops at the first
/// non-digit and saturates on overflow. Returns the value and the number of
/// bytes consumed, or `None` if no digit was found.
fn parse_i32(bytes: &[u8]) -> Option<(i32, usize)> {
    let mut pos = 0;
    while matches!(bytes.get(pos), Some(b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)) {
        pos += 1;
    }

    let negative = match bytes.get(pos) {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let digits_start = pos;
    let mut magnitude: i64 = 0;
    while let Some(digit) = bytes.get(pos).filter(|b| b.is_ascii_digit()) {
        magnitude = (magnitude * 10 + i64::from(digit - b'0')).min(i64::from(i32::MAX) + 1);
        pos += 1;
    }

    if pos == digits_start {
        return None;
    }

    let value = if negative { -magnitude } else { magnitude };
    let value = value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    Some((value, pos))
}
