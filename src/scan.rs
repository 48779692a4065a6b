use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::reg::{Reg, MAX_FRAME_LEN};
use crate::{Error, Trill};

impl<I, E> Trill<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Read the latest scan into the frame buffer.
  ///
  /// The frame length follows the device type: 32 bytes for Square and Hex,
  /// 20 bytes for every other sensor. If the read fails the previous frame is
  /// discarded, so touch queries report no touches until the next successful
  /// read. Identity and mode are never affected.
  pub fn read_frame(&mut self) -> Result<(), Error<E>> {
    let len = self.sensor.device().frame_len();
    let mut buf = [0u8; MAX_FRAME_LEN];

    if let Err(e) = self.read_bytes(Reg::Data, &mut buf[..len]) {
      self.sensor.discard_frame();
      return Err(e);
    }
    self.sensor.store_frame(&buf[..len])
  }
}

#[cfg(test)]
mod tests {
  use crate::mock::{FakeBus, Transfer};
  use crate::{Config, DeviceType, Error, Mode, Rescale, State, Trill};

  fn ready(device: u8, frames: &[&[u8]]) -> Trill<FakeBus> {
    let mut bus = FakeBus::new().respond(&[0x00, device, 0x01]);
    for frame in frames {
      bus = bus.respond(frame);
    }
    let mut trill = Trill::new(bus, Config::new(Rescale::RAW));
    trill.setup().unwrap();
    trill
  }

  #[test]
  fn frame_length_follows_device_type() {
    for device in [DeviceType::Bar, DeviceType::Square, DeviceType::Craft, DeviceType::Ring, DeviceType::Hex, DeviceType::Flex]
    {
      let mut trill = ready(device.code(), &[]);
      trill.read_frame().unwrap();
      assert_eq!(trill.frame().len(), device.frame_len());
      assert_eq!(trill.state(), State::FrameAvailable);
      assert!(matches!(
        trill.release().transfers.last(),
        Some(Transfer::WriteRead(_, offset, len)) if offset.as_slice() == [0x04] && *len == device.frame_len()
      ));
    }
  }

  #[test]
  fn unknown_device_reads_short_frame() {
    let mut trill = ready(0x00, &[]);
    assert_eq!(trill.device_type(), DeviceType::Any);
    trill.read_frame().unwrap();
    assert_eq!(trill.frame().len(), 20);
  }

  #[test]
  fn decodes_touches_after_read() {
    let mut frame = [0xFFu8; 32];
    frame[..4].copy_from_slice(&[0x01, 0x00, 0x02, 0x00]);
    frame[20..24].copy_from_slice(&[0x00, 0x10, 0x00, 0x20]);
    let mut trill = ready(0x02, &[&frame]);

    trill.read_frame().unwrap();
    assert_eq!(trill.touch_count(), 2);
    assert_eq!(trill.touch_location(0).unwrap(), 256.0);
    assert_eq!(trill.touch_location(1).unwrap(), 512.0);
    assert_eq!(trill.touch_size(0).unwrap(), 16.0);
    assert_eq!(trill.touch_size(1).unwrap(), 32.0);
    assert!(matches!(trill.touch_location(2), Err(Error::TouchIndex(2))));
    assert!(matches!(trill.touch_size(2), Err(Error::TouchIndex(2))));
  }

  #[test]
  fn one_dimensional_frames_have_no_sizes() {
    let mut frame = [0xFFu8; 20];
    frame[..2].copy_from_slice(&[0x00, 0x80]);
    let mut trill = ready(0x01, &[&frame]);
    trill.set_rescale(Rescale::new(0.25, 1.0));

    trill.read_frame().unwrap();
    assert_eq!(trill.touch_count(), 1);
    assert_eq!(trill.touch_location(0).unwrap(), 32.0);
    assert!(matches!(trill.touch_size(0), Err(Error::NoSizeData(0))));
    assert!(matches!(trill.touch_size(1), Err(Error::TouchIndex(1))));

    let touch = trill.touches().next().unwrap();
    assert_eq!(touch.location, 32.0);
    assert_eq!(touch.size, None);
  }

  #[test]
  fn read_failure_keeps_identity_and_mode() {
    let mut trill = ready(0x05, &[&[0x00; 32]]);
    trill.read_frame().unwrap();
    assert_eq!(trill.touch_count(), 10);

    trill.i2c.fail_reads = true;
    assert!(matches!(trill.read_frame(), Err(Error::I2c(_))));
    assert_eq!(trill.device_type(), DeviceType::Hex);
    assert_eq!(trill.mode(), Mode::Centroid);
    assert_eq!(trill.state(), State::Ready);
    assert_eq!(trill.touch_count(), 0);

    trill.i2c.fail_reads = false;
    trill.read_frame().unwrap();
    assert_eq!(trill.state(), State::FrameAvailable);
  }

  #[test]
  fn raw_mode_reports_no_touches() {
    let mut trill = ready(0x01, &[&[0x00; 20]]);
    trill.set_mode(Mode::Raw).unwrap();
    trill.read_frame().unwrap();

    assert_eq!(trill.frame().as_bytes(), &[0x00; 20]);
    assert_eq!(trill.touch_count(), 0);
    assert!(matches!(trill.touch_location(0), Err(Error::WrongMode(Mode::Raw))));
    assert!(matches!(trill.touch_size(0), Err(Error::WrongMode(Mode::Raw))));
  }

  #[test]
  fn describe_reports_identity() {
    let trill = ready(0x04, &[]);
    let details = trill.describe();
    assert_eq!(details.device, DeviceType::Ring);
    assert_eq!(details.firmware, 1);
    assert_eq!(details.address, crate::DEFAULT_ADDRESS);
    assert_eq!(details.mode, Mode::Centroid);
  }
}
