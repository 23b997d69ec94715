//! Mock UART for console testing

use heapless::Vec;
use libconsole::uart::Uart;

/// Mock UART that plays back scripted lines and records everything sent
pub struct MockUart {
    lines: &'static [&'static str],
    next: usize,
    pub initialized: bool,
    pub fail_receive: bool,
    pub fail_transmit: bool,
    pub writes: Vec<u8, 2048>,
}

impl MockUart {
    /// Create a ready mock that will deliver `lines` in order, then empty lines
    pub fn new(lines: &'static [&'static str]) -> Self {
        Self {
            lines,
            next: 0,
            initialized: true,
            fail_receive: false,
            fail_transmit: false,
            writes: Vec::new(),
        }
    }

    /// Everything transmitted so far, as text
    pub fn written(&self) -> &str {
        core::str::from_utf8(&self.writes).expect("console output is utf-8")
    }

    /// Forget everything transmitted so far
    pub fn clear(&mut self) {
        self.writes.clear();
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum MockError {
    Receive,
    Transmit,
}

impl Uart for MockUart {
    type Error = MockError;

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn transmit(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        if self.fail_transmit {
            return Err(MockError::Transmit);
        }
        self.writes
            .extend_from_slice(data)
            .map_err(|_| MockError::Transmit)
    }

    fn receive(&mut self, buffer: &mut [u8]) -> Result<usize, Self::Error> {
        if self.fail_receive {
            return Err(MockError::Receive);
        }
        let line = self.lines.get(self.next).copied().unwrap_or("").as_bytes();
        self.next += 1;
        let len = line.len().min(buffer.len());
        buffer[..len].copy_from_slice(&line[..len]);
        Ok(len)
    }
}

#[cfg(feature = "async")]
impl libconsole::uart::AsyncUart for MockUart {
    type Error = MockError;

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    async fn transmit(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        Uart::transmit(self, data)
    }

    async fn receive(&mut self, buffer: &mut [u8]) -> Result<usize, Self::Error> {
        Uart::receive(self, buffer)
    }
}
