use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::reg::Reg;
use crate::{Error, Trill};

/// Longest command ever written: the register offset plus one argument byte.
pub(crate) const MAX_COMMAND_LEN: usize = 2;

/// Prefix `args` with the register offset. Fails if the command is longer than
/// any the protocol defines.
pub(crate) fn command<E>(reg: Reg, args: &[u8]) -> Result<([u8; MAX_COMMAND_LEN], usize), Error<E>> {
  let len = args.len() + 1;
  if len > MAX_COMMAND_LEN {
    return Err(Error::BufferOverflow);
  }
  let mut buf = [0u8; MAX_COMMAND_LEN];
  buf[0] = reg.into();
  buf[1..len].copy_from_slice(args);
  Ok((buf, len))
}

impl<I, E> Trill<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Register read: write the offset, then read `buf.len()` bytes after a
  /// repeated start.
  pub(crate) fn read_bytes(&mut self, reg: Reg, buf: &mut [u8]) -> Result<(), Error<E>> {
    let address = self.sensor.address();
    trace!("Trill at {}: read {} bytes at offset {}", address, buf.len(), reg as u8);
    self.i2c.write_read(address, &[reg.into()], buf).map_err(|e| {
      warn!("Trill at {}: read at offset {} failed", address, reg as u8);
      Error::I2c(e)
    })
  }

  /// Write a command: the register offset followed by `args`.
  pub(crate) fn write_bytes(&mut self, reg: Reg, args: &[u8]) -> Result<(), Error<E>> {
    let address = self.sensor.address();
    let (buf, len) = command(reg, args)?;
    trace!("Trill at {}: write {} bytes at offset {}", address, len, reg as u8);
    self.i2c.write(address, &buf[..len]).map_err(|e| {
      warn!("Trill at {}: write at offset {} failed", address, reg as u8);
      Error::I2c(e)
    })
  }
}
