//! Async driver built on `embedded-hal-async` 1.0. Available with the `async`
//! Cargo feature.
//!
//! [`Trill`] performs the same transactions as the blocking
//! [`crate::Trill`], awaiting each one instead of blocking on it.
//!
//! ```no_run
//! use embedded_hal_async::i2c::{I2c, SevenBitAddress};
//! use trill::{asynch::Trill, Config, Rescale};
//!
//! async fn poll<I2C, E>(i2c: I2C) -> Result<(), trill::Error<E>>
//! where
//!   I2C: I2c<SevenBitAddress, Error = E>,
//! {
//!   let mut sensor = Trill::new(i2c, Config::new(Rescale::RAW));
//!   sensor.setup().await.map_err(|e| match e {
//!     trill::SetupError::IdentifyFailed(e) | trill::SetupError::ModeSetFailed(e) => e,
//!   })?;
//!   loop {
//!     sensor.read_frame().await?;
//!     for touch in sensor.touches() {
//!       let _ = touch.location;
//!     }
//!   }
//! }
//! ```

use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::reg::{Reg, IDENTIFY_LEN, MAX_FRAME_LEN};
use crate::rw::command;
use crate::sensor::Sensor;
use crate::{Error, Mode, SetupError};

/// Async driver for one Trill sensor on one bus address.
pub struct Trill<I> {
  i2c: I,
  sensor: Sensor,
}

sensor_accessors!(Trill);

impl<I, E> Trill<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// See [`crate::Trill::setup`].
  pub async fn setup(&mut self) -> Result<(), SetupError<E>> {
    self.sensor.apply_hint();

    if let Err(e) = self.identify().await {
      warn!("Trill at {}: setup aborted, identification failed", self.sensor.address());
      return Err(SetupError::IdentifyFailed(e));
    }

    if let Err(e) = self.set_mode(Mode::Centroid).await {
      warn!("Trill at {}: setup aborted, could not select centroid mode", self.sensor.address());
      return Err(SetupError::ModeSetFailed(e));
    }

    info!("Trill at {}: ready", self.sensor.address());
    Ok(())
  }

  /// See [`crate::Trill::identify`].
  pub async fn identify(&mut self) -> Result<(), Error<E>> {
    self.write_bytes(Reg::Command, &[]).await?;

    let mut response = [0u8; IDENTIFY_LEN];
    self.read_bytes(Reg::Command, &mut response).await?;

    self.sensor.identified(response);
    Ok(())
  }

  /// See [`crate::Trill::set_mode`].
  pub async fn set_mode(&mut self, mode: Mode) -> Result<(), Error<E>> {
    self.write_bytes(Reg::Command, &[mode.code()]).await?;
    self.sensor.mode_set(mode);
    Ok(())
  }

  /// See [`crate::Trill::read_frame`].
  pub async fn read_frame(&mut self) -> Result<(), Error<E>> {
    let len = self.sensor.device().frame_len();
    let mut buf = [0u8; MAX_FRAME_LEN];

    if let Err(e) = self.read_bytes(Reg::Data, &mut buf[..len]).await {
      self.sensor.discard_frame();
      return Err(e);
    }
    self.sensor.store_frame(&buf[..len])
  }

  async fn read_bytes(&mut self, reg: Reg, buf: &mut [u8]) -> Result<(), Error<E>> {
    let address = self.sensor.address();
    trace!("Trill at {}: read {} bytes at offset {}", address, buf.len(), reg as u8);
    self.i2c.write_read(address, &[reg.into()], buf).await.map_err(|e| {
      warn!("Trill at {}: read at offset {} failed", address, reg as u8);
      Error::I2c(e)
    })
  }

  async fn write_bytes(&mut self, reg: Reg, args: &[u8]) -> Result<(), Error<E>> {
    let address = self.sensor.address();
    let (buf, len) = command(reg, args)?;
    trace!("Trill at {}: write {} bytes at offset {}", address, len, reg as u8);
    self.i2c.write(address, &buf[..len]).await.map_err(|e| {
      warn!("Trill at {}: write at offset {} failed", address, reg as u8);
      Error::I2c(e)
    })
  }
}
