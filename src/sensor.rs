use crate::frame::{Frame, Touches};
use crate::{Config, Details, DeviceType, Error, Mode};

/// Lifecycle of a driver instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
  /// No successful identification yet.
  Uninitialized,
  /// Identified, but no mode has been set since.
  Identified,
  /// Identified and configured; no fresh frame is buffered.
  Ready,
  /// The buffered frame comes from the latest, successful read.
  FrameAvailable,
}

/// Bus-independent part of the driver: identity, mode and the last frame.
#[derive(Debug, Clone)]
pub(crate) struct Sensor {
  config: Config,
  device: DeviceType,
  firmware: u8,
  mode: Mode,
  identified: bool,
  configured: bool,
  fresh: bool,
  frame: Frame,
}

impl Sensor {
  pub(crate) const fn new(config: Config) -> Self {
    Self {
      config,
      device: DeviceType::None,
      firmware: 0,
      mode: Mode::Auto,
      identified: false,
      configured: false,
      fresh: false,
      frame: Frame::new(),
    }
  }

  pub(crate) fn config(&self) -> &Config {
    &self.config
  }

  pub(crate) fn set_config(&mut self, config: Config) {
    self.config = config;
  }

  pub(crate) fn address(&self) -> u8 {
    self.config.address
  }

  pub(crate) fn device(&self) -> DeviceType {
    self.device
  }

  pub(crate) fn firmware(&self) -> u8 {
    self.firmware
  }

  pub(crate) fn mode(&self) -> Mode {
    self.mode
  }

  pub(crate) fn frame(&self) -> &Frame {
    &self.frame
  }

  pub(crate) fn state(&self) -> State {
    match (self.identified, self.configured, self.fresh) {
      (false, _, _) => State::Uninitialized,
      (true, false, _) => State::Identified,
      (true, true, false) => State::Ready,
      (true, true, true) => State::FrameAvailable,
    }
  }

  /// Seed the device type from the configured hint, before identification.
  pub(crate) fn apply_hint(&mut self) {
    if !self.identified {
      self.device = self.config.device;
    }
  }

  pub(crate) fn identified(&mut self, response: [u8; 3]) {
    let device = DeviceType::from_code(response[1]);
    let hint = self.config.device;
    if !matches!(hint, DeviceType::Any | DeviceType::None) && hint != device {
      warn!("Trill at {}: expected {:?}, identified {:?}", self.address(), hint, device);
    }

    self.device = device;
    self.firmware = response[2];
    self.identified = true;
    self.discard_frame();
    info!("Trill at {}: identified {:?}, firmware {}", self.address(), device, self.firmware);
  }

  pub(crate) fn mode_set(&mut self, mode: Mode) {
    self.mode = mode;
    self.configured = self.identified;
    self.discard_frame();
    debug!("Trill at {}: mode set to {:?}", self.address(), mode);
  }

  pub(crate) fn store_frame<E>(&mut self, bytes: &[u8]) -> Result<(), Error<E>> {
    if self.frame.fill(bytes).is_err() {
      self.discard_frame();
      return Err(Error::BufferOverflow);
    }
    self.fresh = true;
    Ok(())
  }

  pub(crate) fn discard_frame(&mut self) {
    self.frame.clear();
    self.fresh = false;
  }

  pub(crate) fn touch_count(&self) -> usize {
    if self.mode != Mode::Centroid {
      return 0;
    }
    self.frame.touch_count()
  }

  pub(crate) fn touch_location<E>(&self, index: usize) -> Result<f32, Error<E>> {
    self.check_centroid()?;
    let raw = self.frame.location(index).ok_or(Error::TouchIndex(index))?;
    Ok(f32::from(raw) * self.config.rescale.position)
  }

  pub(crate) fn touch_size<E>(&self, index: usize) -> Result<f32, Error<E>> {
    self.check_centroid()?;
    if index >= self.frame.touch_count() {
      return Err(Error::TouchIndex(index));
    }
    let raw = self.frame.size(index).ok_or(Error::NoSizeData(index))?;
    Ok(f32::from(raw) * self.config.rescale.size)
  }

  pub(crate) fn touches(&self) -> Touches<'_> {
    let rescale = self.config.rescale;
    Touches::new(&self.frame, rescale.position, rescale.size, self.touch_count())
  }

  pub(crate) fn details(&self) -> Details {
    Details { device: self.device, firmware: self.firmware, address: self.address(), mode: self.mode }
  }

  fn check_centroid<E>(&self) -> Result<(), Error<E>> {
    match self.mode {
      Mode::Centroid => Ok(()),
      mode => Err(Error::WrongMode(mode)),
    }
  }
}
