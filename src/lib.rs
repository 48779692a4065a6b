#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `no_std` driver for the Trill family of capacitive touch sensors (Bar,
//! Square, Craft, Ring, Hex, Flex).
//!
//! Trill sensors speak a minimal register protocol over I²C: a command register
//! used to identify the device and choose its acquisition mode, and a data
//! register holding the latest scan. This crate wraps that protocol with:
//!
//! - Device identification (type and firmware revision)
//! - Acquisition mode selection, with centroid mode configured by [`Trill::setup`]
//! - Frame acquisition sized for one- and two-dimensional sensors
//! - Decoding of centroid frames into touch locations and sizes, scaled by
//!   caller-supplied [`Rescale`] factors
//! - `embedded-hal` 1.0 blocking traits, and `embedded-hal-async` under the
//!   `async` Cargo feature (see [`asynch`])
//!
//! ```no_run
//! use embedded_hal::i2c::{I2c, SevenBitAddress};
//! use trill::{Config, DeviceType, Rescale, Trill};
//!
//! fn example<I2C, E>(i2c: I2C) -> Result<(), trill::SetupError<E>>
//! where
//!   I2C: I2c<SevenBitAddress, Error = E>,
//! {
//!   let config = Config::new(Rescale::RAW).with_address(0x28).with_device(DeviceType::Square);
//!   let mut sensor = Trill::new(i2c, config);
//!   sensor.setup()?;
//!
//!   if sensor.read_frame().is_ok() {
//!     for touch in sensor.touches() {
//!       let _ = (touch.location, touch.size);
//!     }
//!   }
//!   Ok(())
//! }
//! ```
#[macro_use]
mod fmt;
#[macro_use]
mod driver;

#[cfg(feature = "async")]
pub mod asynch;
mod config;
mod control;
mod device;
mod frame;
mod reg;
mod rw;
mod scan;
mod sensor;

#[cfg(test)]
mod mock;

pub use config::*;
pub use device::*;
pub use frame::{Frame, Touch, Touches, LOCATION_SLOTS};
pub use reg::{DEFAULT_ADDRESS, FRAME_LEN_1D, FRAME_LEN_2D, MAX_FRAME_LEN};
pub use sensor::State;

use sensor::Sensor;

/// Errors that can occur while talking to a sensor or decoding its frames.
#[derive(Debug, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
  /// I²C bus transaction failed with the underlying driver error (no
  /// acknowledge, arbitration loss, timeout, ...).
  #[error("I2C transaction failed: {0:?}")]
  I2c(E),
  /// Touch data was requested while the sensor is not in centroid mode.
  #[error("touches are only decoded in centroid mode, sensor is in {0:?} mode")]
  WrongMode(Mode),
  /// The touch index is at or past the touch count of the current frame.
  #[error("touch {0} is not present in the current frame")]
  TouchIndex(usize),
  /// The touch is present but the frame ends before its size slot, as with
  /// the 20-byte frames of one-dimensional sensors.
  #[error("frame carries no size for touch {0}")]
  NoSizeData(usize),
  /// A frame did not fit the frame buffer.
  #[error("frame does not fit the frame buffer")]
  BufferOverflow,
}

/// Failure of [`Trill::setup`], tagged with the stage that failed.
#[derive(Debug, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SetupError<E> {
  /// The identify command or the identification read-back failed.
  #[error("identify failed: {0}")]
  IdentifyFailed(Error<E>),
  /// The device was identified but selecting centroid mode failed.
  #[error("setting centroid mode failed: {0}")]
  ModeSetFailed(Error<E>),
}

impl<E> SetupError<E> {
  /// The underlying driver error, whichever stage failed.
  pub fn error(&self) -> &Error<E> {
    match self {
      Self::IdentifyFailed(e) | Self::ModeSetFailed(e) => e,
    }
  }
}

/// Blocking driver for one Trill sensor on one bus address.
///
/// The driver owns the I²C peripheral (or a shared-bus device handle) until
/// [`Trill::release`] hands it back. Create it with [`Trill::new`], call
/// [`Trill::setup`] once, then alternate [`Trill::read_frame`] with the touch
/// queries, which decode the buffered frame without touching the bus.
pub struct Trill<I> {
  i2c: I,
  sensor: Sensor,
}

sensor_accessors!(Trill);
