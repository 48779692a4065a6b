use core::fmt;

use crate::reg::{FRAME_LEN_1D, FRAME_LEN_2D};

/// Members of the Trill sensor family, as reported by the identify command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(i8)]
pub enum DeviceType {
  /// No device has been identified.
  None = -1,
  /// A valid device of unknown type. Also used as "accept any" setup hint.
  Any = 0,
  Bar = 1,
  Square = 2,
  Craft = 3,
  Ring = 4,
  Hex = 5,
  Flex = 6,
}

impl DeviceType {
  /// Decode the type byte of an identify response.
  ///
  /// Codes the driver does not know about still belong to a responding device,
  /// so they map to [`DeviceType::Any`].
  pub const fn from_code(code: u8) -> Self {
    match code {
      0xFF => Self::None,
      1 => Self::Bar,
      2 => Self::Square,
      3 => Self::Craft,
      4 => Self::Ring,
      5 => Self::Hex,
      6 => Self::Flex,
      _ => Self::Any,
    }
  }

  pub const fn code(self) -> u8 {
    self as i8 as u8
  }

  /// Returns `true` for sensors reporting two axes (Square, Hex).
  pub const fn is_2d(self) -> bool {
    matches!(self, Self::Square | Self::Hex)
  }

  /// Number of bytes in one centroid frame for this device.
  pub const fn frame_len(self) -> usize {
    if self.is_2d() {
      FRAME_LEN_2D
    } else {
      FRAME_LEN_1D
    }
  }

  pub const fn as_str(self) -> &'static str {
    match self {
      Self::None => "none",
      Self::Any => "unknown",
      Self::Bar => "Bar",
      Self::Square => "Square",
      Self::Craft => "Craft",
      Self::Ring => "Ring",
      Self::Hex => "Hex",
      Self::Flex => "Flex",
    }
  }
}

impl fmt::Display for DeviceType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Acquisition mode of the sensor.
///
/// Only [`Mode::Centroid`] frames are decoded by this driver; the other modes
/// can be selected but their payloads are left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(i8)]
pub enum Mode {
  /// Let the firmware pick a mode based on the device type.
  Auto = -1,
  /// Discrete touches with pre-computed location and size.
  Centroid = 0,
  /// Raw per-electrode readings.
  Raw = 1,
  /// Per-electrode baseline values.
  Baseline = 2,
  /// Per-electrode difference from the baseline.
  Diff = 3,
}

impl Mode {
  /// Byte written after the command offset to select this mode.
  pub const fn code(self) -> u8 {
    self as i8 as u8
  }
}

impl From<Mode> for u8 {
  fn from(m: Mode) -> Self {
    m.code()
  }
}

impl TryFrom<u8> for Mode {
  type Error = ();

  fn try_from(code: u8) -> Result<Self, Self::Error> {
    match code {
      0xFF => Ok(Self::Auto),
      0 => Ok(Self::Centroid),
      1 => Ok(Self::Raw),
      2 => Ok(Self::Baseline),
      3 => Ok(Self::Diff),
      _ => Err(()),
    }
  }
}

/// Snapshot of the driver's identity and mode, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Details {
  pub device: DeviceType,
  pub firmware: u8,
  pub address: u8,
  pub mode: Mode,
}

impl fmt::Display for Details {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Trill {} (firmware {}) at {:#04x}, mode {:?}",
      self.device, self.firmware, self.address, self.mode
    )
  }
}

#[cfg(test)]
mod tests {
  extern crate std;

  use super::*;
  use std::string::ToString;

  #[test]
  fn device_codes_decode() {
    assert_eq!(DeviceType::from_code(0x02), DeviceType::Square);
    assert_eq!(DeviceType::from_code(0x06), DeviceType::Flex);
    assert_eq!(DeviceType::from_code(0xFF), DeviceType::None);
    assert_eq!(DeviceType::from_code(0x00), DeviceType::Any);
    assert_eq!(DeviceType::from_code(0x2A), DeviceType::Any);
  }

  #[test]
  fn frame_len_follows_dimensions() {
    for device in [DeviceType::Square, DeviceType::Hex] {
      assert!(device.is_2d());
      assert_eq!(device.frame_len(), 32);
    }
    for device in [
      DeviceType::None,
      DeviceType::Any,
      DeviceType::Bar,
      DeviceType::Craft,
      DeviceType::Ring,
      DeviceType::Flex,
    ] {
      assert!(!device.is_2d());
      assert_eq!(device.frame_len(), 20);
    }
  }

  #[test]
  fn mode_codes_use_twos_complement() {
    assert_eq!(Mode::Auto.code(), 0xFF);
    assert_eq!(Mode::Centroid.code(), 0x00);
    assert_eq!(u8::from(Mode::Diff), 0x03);
    assert_eq!(Mode::try_from(0xFF), Ok(Mode::Auto));
    assert_eq!(Mode::try_from(0x02), Ok(Mode::Baseline));
    assert!(Mode::try_from(0x04).is_err());
  }

  #[test]
  fn details_display() {
    let details = Details { device: DeviceType::Square, firmware: 5, address: 0x28, mode: Mode::Centroid };
    assert_eq!(details.to_string(), "Trill Square (firmware 5) at 0x28, mode Centroid");
  }
}
