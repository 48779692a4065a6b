use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::reg::{Reg, IDENTIFY_LEN};
use crate::{Error, Mode, SetupError, Trill};

impl<I, E> Trill<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Identify the sensor and switch it to centroid mode.
  ///
  /// The device type is seeded from [`crate::Config::device`] and then
  /// replaced by what the sensor reports. If mode selection fails, the
  /// identification result is kept.
  pub fn setup(&mut self) -> Result<(), SetupError<E>> {
    self.sensor.apply_hint();

    self.identify().map_err(|e| {
      warn!("Trill at {}: setup aborted, identification failed", self.sensor.address());
      SetupError::IdentifyFailed(e)
    })?;

    self.set_mode(Mode::Centroid).map_err(|e| {
      warn!("Trill at {}: setup aborted, could not select centroid mode", self.sensor.address());
      SetupError::ModeSetFailed(e)
    })?;

    info!("Trill at {}: ready", self.sensor.address());
    Ok(())
  }

  /// Ask the sensor for its type and firmware revision.
  ///
  /// On failure the previously known identity is left untouched.
  pub fn identify(&mut self) -> Result<(), Error<E>> {
    self.write_bytes(Reg::Command, &[])?;

    let mut response = [0u8; IDENTIFY_LEN];
    self.read_bytes(Reg::Command, &mut response)?;

    self.sensor.identified(response);
    Ok(())
  }

  /// Select the acquisition mode. The current mode only changes once the
  /// command was acknowledged.
  pub fn set_mode(&mut self, mode: Mode) -> Result<(), Error<E>> {
    self.write_bytes(Reg::Command, &[mode.code()])?;
    self.sensor.mode_set(mode);
    Ok(())
  }
}
