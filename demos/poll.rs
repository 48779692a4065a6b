//! Polling loop: set a Square up at 0x28, then print its touches every 100 ms.
#![allow(unused)]
use embedded_hal::{
  delay::DelayNs,
  i2c::{I2c, SevenBitAddress},
};
use trill::{Config, DeviceType, Rescale, Trill};

#[allow(dead_code)]
fn run<I2C, D, E>(i2c: I2C, mut delay: D) -> Result<(), trill::SetupError<E>>
where
  I2C: I2c<SevenBitAddress, Error = E>,
  D: DelayNs,
  E: core::fmt::Debug,
{
  let config = Config::new(Rescale::RAW).with_address(0x28).with_device(DeviceType::Square);
  let mut sensor = Trill::new(i2c, config);
  sensor.setup()?;
  println!("{}", sensor.describe());

  loop {
    match sensor.read_frame() {
      Ok(()) => {
        println!("Number of touches: {}", sensor.touch_count());
        for (i, touch) in sensor.touches().enumerate() {
          println!("Touch {}: location = {:.2}, size = {:?}", i, touch.location, touch.size);
        }
      }
      Err(e) => println!("Failed to read touch data: {}", e),
    }
    delay.delay_ms(100);
  }
}

fn main() {}
