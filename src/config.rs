use crate::{reg::DEFAULT_ADDRESS, DeviceType};

/// Multipliers converting raw 16-bit centroid magnitudes into caller units.
///
/// Trill firmware reports positions and sizes as raw integers whose range
/// depends on the device family and its electrode count. The driver has no
/// calibration table of its own, so the factors are always supplied by the
/// application.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rescale {
  pub position: f32,
  pub size: f32,
}

impl Rescale {
  /// Report raw integer magnitudes unchanged.
  pub const RAW: Self = Self::new(1.0, 1.0);

  pub const fn new(position: f32, size: f32) -> Self {
    Self { position, size }
  }

  /// Normalize against the full-scale raw values of a specific sensor, so that
  /// `full_scale_position` maps to `1.0`.
  pub fn normalized(full_scale_position: u16, full_scale_size: u16) -> Self {
    Self::new(1.0 / f32::from(full_scale_position.max(1)), 1.0 / f32::from(full_scale_size.max(1)))
  }
}

/// Connection and decoding parameters for one sensor.
///
/// # Example
/// ```no_run
/// use trill::{Config, DeviceType, Rescale};
///
/// let config = Config::new(Rescale::normalized(3200, 5000))
///   .with_address(0x28)
///   .with_device(DeviceType::Square);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
  /// 7-bit bus address of the sensor.
  pub address: u8,
  /// Expected device type. [`DeviceType::Any`] accepts whatever responds;
  /// the identified type always replaces the hint.
  pub device: DeviceType,
  pub rescale: Rescale,
}

impl Config {
  pub const fn new(rescale: Rescale) -> Self {
    Self { address: DEFAULT_ADDRESS, device: DeviceType::Any, rescale }
  }

  pub const fn with_address(mut self, address: u8) -> Self {
    self.address = address;
    self
  }

  pub const fn with_device(mut self, device: DeviceType) -> Self {
    self.device = device;
    self
  }

  pub const fn with_rescale(mut self, rescale: Rescale) -> Self {
    self.rescale = rescale;
    self
  }
}
