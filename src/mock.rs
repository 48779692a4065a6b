//! Scripted I²C bus for unit tests.
extern crate std;

use std::collections::VecDeque;
use std::vec::Vec;

use embedded_hal::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation, SevenBitAddress};

/// Byte returned for reads without a scripted response: an empty centroid
/// frame.
const IDLE: u8 = 0xFF;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Transfer {
  Write(u8, Vec<u8>),
  /// Bytes written before the repeated start, and the number of bytes read.
  WriteRead(u8, Vec<u8>, usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FakeError;

impl embedded_hal::i2c::Error for FakeError {
  fn kind(&self) -> ErrorKind {
    ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)
  }
}

#[derive(Debug, Default)]
pub(crate) struct FakeBus {
  pub transfers: Vec<Transfer>,
  pub responses: VecDeque<Vec<u8>>,
  /// Writes (including the offset write of a register read) fail once this
  /// many writes have been attempted.
  pub fail_writes_after: Option<usize>,
  pub fail_reads: bool,
  writes: usize,
}

impl FakeBus {
  pub fn new() -> Self {
    Self::default()
  }

  /// Queue the bytes returned by the next read.
  pub fn respond(mut self, bytes: &[u8]) -> Self {
    self.responses.push_back(bytes.to_vec());
    self
  }

  fn run(&mut self, address: SevenBitAddress, operations: &mut [Operation<'_>]) -> Result<(), FakeError> {
    match operations {
      [Operation::Write(bytes)] => {
        self.count_write()?;
        self.transfers.push(Transfer::Write(address, bytes.to_vec()));
      }
      [Operation::Write(bytes), Operation::Read(buf)] => {
        self.count_write()?;
        if self.fail_reads {
          return Err(FakeError);
        }
        buf.fill(IDLE);
        if let Some(response) = self.responses.pop_front() {
          let len = response.len().min(buf.len());
          buf[..len].copy_from_slice(&response[..len]);
        }
        self.transfers.push(Transfer::WriteRead(address, bytes.to_vec(), buf.len()));
      }
      _ => unimplemented!("transaction shape not used by the driver"),
    }
    Ok(())
  }

  fn count_write(&mut self) -> Result<(), FakeError> {
    let attempt = self.writes;
    self.writes += 1;
    match self.fail_writes_after {
      Some(limit) if attempt >= limit => Err(FakeError),
      _ => Ok(()),
    }
  }
}

impl ErrorType for FakeBus {
  type Error = FakeError;
}

impl embedded_hal::i2c::I2c for FakeBus {
  fn transaction(&mut self, address: SevenBitAddress, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
    self.run(address, operations)
  }
}

#[cfg(feature = "async")]
impl embedded_hal_async::i2c::I2c for FakeBus {
  async fn transaction(
    &mut self,
    address: SevenBitAddress,
    operations: &mut [Operation<'_>],
  ) -> Result<(), Self::Error> {
    self.run(address, operations)
  }
}
