//! Centroid frame buffer and decoding.
//!
//! A centroid frame starts with a fixed 20-byte location block holding up to
//! ten big-endian `u16` slots. The first slot equal to `0xFFFF` ends the list of
//! active touches. Touch sizes follow at byte offset 20, again as big-endian
//! `u16` slots in the same order as the locations.
//!
//! One-dimensional sensors return 20-byte frames, so their size slots lie past
//! the end of the frame and are reported as absent. Two-dimensional sensors
//! return 32-byte frames whose bytes after the size slots carry a second axis
//! that is not decoded here.

use heapless::Vec;

use crate::reg::{LOCATION_BLOCK_LEN, MAX_FRAME_LEN, NO_TOUCH, SIZE_BLOCK_OFFSET};

/// Number of location slots in the location block.
pub const LOCATION_SLOTS: usize = LOCATION_BLOCK_LEN / 2;

/// Raw bytes of the most recent scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
  data: Vec<u8, MAX_FRAME_LEN>,
}

impl Frame {
  pub const fn new() -> Self {
    Self { data: Vec::new() }
  }

  /// Build a frame from captured bytes. Returns `None` if `bytes` is longer
  /// than any device frame.
  pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
    Vec::from_slice(bytes).ok().map(|data| Self { data })
  }

  /// Replace the whole content with `bytes`. On overflow the frame is left
  /// empty.
  pub(crate) fn fill(&mut self, bytes: &[u8]) -> Result<(), ()> {
    self.data.clear();
    self.data.extend_from_slice(bytes)
  }

  pub(crate) fn clear(&mut self) {
    self.data.clear();
  }

  pub fn as_bytes(&self) -> &[u8] {
    &self.data
  }

  pub fn len(&self) -> usize {
    self.data.len()
  }

  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }

  /// Number of active touches: location slots before the first `0xFFFF`.
  pub fn touch_count(&self) -> usize {
    (0..LOCATION_SLOTS)
      .map_while(|slot| self.word(slot * 2))
      .take_while(|&raw| raw != NO_TOUCH)
      .count()
  }

  /// Raw location of touch `index`, if it is active.
  pub fn location(&self, index: usize) -> Option<u16> {
    if index >= self.touch_count() {
      return None;
    }
    self.word(index * 2)
  }

  /// Raw size of touch `index`, if it is active and its size slot lies inside
  /// the frame.
  pub fn size(&self, index: usize) -> Option<u16> {
    if index >= self.touch_count() {
      return None;
    }
    self.word(SIZE_BLOCK_OFFSET + index * 2)
  }

  fn word(&self, offset: usize) -> Option<u16> {
    match self.data.get(offset..offset + 2)? {
      &[hi, lo] => Some(u16::from_be_bytes([hi, lo])),
      _ => None,
    }
  }
}

/// One decoded touch, scaled by the configured [`crate::Rescale`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Touch {
  pub location: f32,
  /// `None` when the frame carries no size slot for this touch.
  pub size: Option<f32>,
}

/// Iterator over the touches of a frame, see [`crate::Trill::touches`].
#[derive(Debug, Clone)]
pub struct Touches<'a> {
  frame: &'a Frame,
  position: f32,
  size: f32,
  next: usize,
  count: usize,
}

impl<'a> Touches<'a> {
  pub(crate) fn new(frame: &'a Frame, position: f32, size: f32, count: usize) -> Self {
    Self { frame, position, size, next: 0, count }
  }
}

impl Iterator for Touches<'_> {
  type Item = Touch;

  fn next(&mut self) -> Option<Touch> {
    if self.next >= self.count {
      return None;
    }
    let index = self.next;
    self.next += 1;
    let location = f32::from(self.frame.location(index)?) * self.position;
    let size = self.frame.size(index).map(|raw| f32::from(raw) * self.size);
    Some(Touch { location, size })
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let left = self.count - self.next;
    (left, Some(left))
  }
}

impl ExactSizeIterator for Touches<'_> {}
