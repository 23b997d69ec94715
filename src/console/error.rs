//! Error and status types for console operations

/// Errors reported by the console.
///
/// All errors are returned synchronously to the immediate caller. None of them
/// leave the command registry or the line buffer in an undefined state, so the
/// caller is free to retry.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The UART reported itself as not initialized when the console was started.
    ChannelNotReady,
    /// The command table is full; the registration was not applied.
    CapacityExceeded,
    /// The UART failed to deliver a line.
    ChannelError,
    /// The UART failed to send console output.
    TransmitError,
}

/// Successful outcome of a print operation.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Status {
    /// Nothing to send; no bytes reached the channel.
    Empty,
    /// The whole text was handed to the channel.
    Sent,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::ChannelNotReady => defmt::write!(f, "ChannelNotReady"),
            Error::CapacityExceeded => defmt::write!(f, "CapacityExceeded"),
            Error::ChannelError => defmt::write!(f, "ChannelError"),
            Error::TransmitError => defmt::write!(f, "TransmitError"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Status {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Status::Empty => defmt::write!(f, "Empty"),
            Status::Sent => defmt::write!(f, "Sent"),
        }
    }
}
