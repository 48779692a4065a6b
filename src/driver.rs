//! Bus-free accessors shared by the blocking and async drivers. Both keep
//! their state in a `sensor: Sensor` field next to the bus handle `i2c`.

macro_rules! sensor_accessors {
  ($driver:ident) => {
    impl<I> $driver<I> {
      /// Create a driver. Nothing is sent on the bus until `setup` or
      /// `identify` is called.
      pub const fn new(i2c: I, config: $crate::Config) -> Self {
        Self { i2c, sensor: $crate::sensor::Sensor::new(config) }
      }

      /// Give the bus back, consuming the driver.
      pub fn release(self) -> I {
        self.i2c
      }

      pub fn config(&self) -> &$crate::Config {
        self.sensor.config()
      }

      /// Replace the rescale factors used by subsequent touch queries.
      pub fn set_rescale(&mut self, rescale: $crate::Rescale) {
        let config = self.sensor.config().with_rescale(rescale);
        self.sensor.set_config(config);
      }

      pub fn address(&self) -> u8 {
        self.sensor.address()
      }

      pub fn device_type(&self) -> $crate::DeviceType {
        self.sensor.device()
      }

      pub fn firmware_version(&self) -> u8 {
        self.sensor.firmware()
      }

      pub fn mode(&self) -> $crate::Mode {
        self.sensor.mode()
      }

      pub fn state(&self) -> $crate::State {
        self.sensor.state()
      }

      /// Raw bytes of the buffered frame.
      pub fn frame(&self) -> &$crate::Frame {
        self.sensor.frame()
      }

      /// Number of touches in the buffered frame; always 0 outside centroid
      /// mode.
      pub fn touch_count(&self) -> usize {
        self.sensor.touch_count()
      }

      /// Location of touch `index`, scaled by [`Rescale::position`](crate::Rescale::position).
      pub fn touch_location(&self, index: usize) -> Result<f32, $crate::Error<I::Error>>
      where
        I: ::embedded_hal::i2c::ErrorType,
      {
        self.sensor.touch_location(index)
      }

      /// Size of touch `index`, scaled by [`Rescale::size`](crate::Rescale::size).
      ///
      /// Sizes are read from byte offset 20 of the frame, so one-dimensional
      /// sensors, whose frames are 20 bytes long, report
      /// [`Error::NoSizeData`](crate::Error::NoSizeData) for present touches.
      pub fn touch_size(&self, index: usize) -> Result<f32, $crate::Error<I::Error>>
      where
        I: ::embedded_hal::i2c::ErrorType,
      {
        self.sensor.touch_size(index)
      }

      /// Iterate over the touches of the buffered frame.
      pub fn touches(&self) -> $crate::Touches<'_> {
        self.sensor.touches()
      }

      /// Identity, address and mode, printable with `{}`.
      pub fn describe(&self) -> $crate::Details {
        self.sensor.details()
      }
    }
  };
}
