//! UART channel abstraction consumed by the console.
//!
//! The console never touches hardware directly. Anything that can report
//! whether it is ready, send a run of bytes and hand back one received line can
//! drive it: a HAL UART peripheral, a USB CDC endpoint, a TCP socket on a host,
//! or a mock in tests.
//!
//! Line framing (what marks the end of a line, whether CR/LF are stripped,
//! whether characters are echoed) is entirely the channel's business.
//!
//! # Examples
//!
//! ```rust
//! use libconsole::uart::Uart;
//!
//! struct Loopback {
//!     pending: &'static [u8],
//! }
//!
//! impl Uart for Loopback {
//!     type Error = ();
//!
//!     fn is_initialized(&self) -> bool {
//!         true
//!     }
//!
//!     fn transmit(&mut self, _data: &[u8]) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//!
//!     fn receive(&mut self, buffer: &mut [u8]) -> Result<usize, Self::Error> {
//!         let len = self.pending.len().min(buffer.len());
//!         buffer[..len].copy_from_slice(&self.pending[..len]);
//!         Ok(len)
//!     }
//! }
//! ```

#![allow(async_fn_in_trait)]
#![deny(unsafe_code)]

/// Re-exports of the channel traits
pub mod prelude {
    #[cfg(feature = "async")]
    pub use super::AsyncUart;
    pub use super::Uart;
}

/// A blocking, line-oriented serial channel.
pub trait Uart {
    /// Associated error type
    type Error: core::fmt::Debug;

    /// Whether the underlying peripheral has been brought up.
    fn is_initialized(&self) -> bool;

    /// Send all of `data`. Partial sends are reported as an error.
    fn transmit(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Block until one line is available and copy it into `buffer`.
    ///
    /// Returns the number of bytes of the line written into `buffer`. A line
    /// shorter than the buffer may also be terminated by a NUL byte.
    fn receive(&mut self, buffer: &mut [u8]) -> Result<usize, Self::Error>;
}

impl<T: Uart + ?Sized> Uart for &mut T {
    type Error = T::Error;

    fn is_initialized(&self) -> bool {
        T::is_initialized(self)
    }

    fn transmit(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        T::transmit(self, data)
    }

    fn receive(&mut self, buffer: &mut [u8]) -> Result<usize, Self::Error> {
        T::receive(self, buffer)
    }
}

/// The asynchronous counterpart of [`Uart`].
#[cfg(feature = "async")]
pub trait AsyncUart {
    /// Associated error type
    type Error: core::fmt::Debug;

    /// Whether the underlying peripheral has been brought up.
    fn is_initialized(&self) -> bool;

    /// Send all of `data` asynchronously.
    async fn transmit(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Wait for one line and copy it into `buffer`, returning its length.
    async fn receive(&mut self, buffer: &mut [u8]) -> Result<usize, Self::Error>;
}
