//! RGBA frame buffer the preview renders into.

use rhizome_resin_vecmath::Channel;

const BYTES_PER_PIXEL: usize = 4;

/// Row-major RGBA8 pixels, four bytes per pixel.
#[derive(Debug, Clone)]
pub struct Frame {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Frame {
    /// Creates a transparent black frame.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * BYTES_PER_PIXEL],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Byte offset of the pixel at (row, column).
    pub fn pixel_offset(&self, row: usize, column: usize) -> usize {
        row * self.width * BYTES_PER_PIXEL + column * BYTES_PER_PIXEL
    }

    /// Writes an opaque gray pixel.
    pub fn put_gray(&mut self, row: usize, column: usize, level: u8) {
        let offset = self.pixel_offset(row, column);
        for channel in [Channel::R, Channel::G, Channel::B] {
            self.data[offset + channel.axis().index()] = level;
        }
        self.data[offset + Channel::A.axis().index()] = u8::MAX;
    }

    /// Reads one channel of a pixel.
    pub fn channel(&self, row: usize, column: usize, channel: Channel) -> u8 {
        self.data[self.pixel_offset(row, column) + channel.axis().index()]
    }
}

/// Maps a unit-range value to a byte, clamping like a canvas does.
pub fn level(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_offsets_are_row_major() {
        let frame = Frame::new(3, 2);
        assert_eq!(frame.pixel_offset(0, 0), 0);
        assert_eq!(frame.pixel_offset(0, 2), 8);
        assert_eq!(frame.pixel_offset(1, 0), 12);
    }

    #[test]
    fn test_put_gray_is_opaque() {
        let mut frame = Frame::new(2, 2);
        frame.put_gray(1, 1, 77);
        assert_eq!(frame.channel(1, 1, Channel::R), 77);
        assert_eq!(frame.channel(1, 1, Channel::B), 77);
        assert_eq!(frame.channel(1, 1, Channel::A), 255);
        assert_eq!(frame.channel(0, 1, Channel::A), 0);
    }

    #[test]
    fn test_level_clamps() {
        assert_eq!(level(-0.5), 0);
        assert_eq!(level(0.5), 128);
        assert_eq!(level(1.5), 255);
    }
}
