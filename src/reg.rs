/******************************************************************************
 * Trill sensors expose a small register window over I2C:                     *
 * - a command register where one or two byte commands are written            *
 * - a data register holding the latest scan, read with a repeated start      *
 * ========================================================================== *
 *                         Trill - Registers & Frame Layout                   *
*******************************************************************************/

/// Factory default 7-bit address. Boards may be strapped to other addresses.
pub const DEFAULT_ADDRESS: u8 = 0x20;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Reg {
  /// Command register. Writing `[Command]` requests identification, writing
  /// `[Command, mode]` selects the acquisition mode. Reading 3 bytes from here
  /// returns the identification response.
  Command = 0x00,
  /// Start of the scan data.
  Data = 0x04,
}

impl From<Reg> for u8 {
  #[inline]
  fn from(r: Reg) -> Self {
    r as u8
  }
}

/// Length of the identification response read back from [`Reg::Command`].
pub(crate) const IDENTIFY_LEN: usize = 3;

/// Centroid frame length for one-dimensional sensors (Bar, Ring, Craft, Flex).
pub const FRAME_LEN_1D: usize = 20;
/// Centroid frame length for two-dimensional sensors (Square, Hex).
pub const FRAME_LEN_2D: usize = 32;
/// Largest frame any supported device produces.
pub const MAX_FRAME_LEN: usize = FRAME_LEN_2D;

/// Byte length of the location block at the start of a centroid frame.
pub(crate) const LOCATION_BLOCK_LEN: usize = 20;
/// Byte offset of the first touch size. Fixed for every frame length.
pub(crate) const SIZE_BLOCK_OFFSET: usize = LOCATION_BLOCK_LEN;
/// Location slot value marking the end of the active touches.
pub(crate) const NO_TOUCH: u16 = 0xFFFF;
