use embedded_graphics::image::{Image, ImageRaw};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

pub const ICON_SIZE: u32 = 8;

/// 8x8 monochrome glyph, one byte per row, most significant bit on the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    rows: [u8; 8],
}

impl Icon {
    pub const fn new(rows: [u8; 8]) -> Self {
        Self { rows }
    }

    pub const fn rows(&self) -> &[u8; 8] {
        &self.rows
    }

    pub fn is_set(&self, x: u32, y: u32) -> bool {
        if x >= ICON_SIZE || y >= ICON_SIZE {
            return false;
        }
        self.rows[y as usize] & (0x80 >> x) != 0
    }

    /// Draw the icon with its top left corner at `top_left`. Clear bits are drawn as
    /// `BinaryColor::Off` so the icon replaces whatever was underneath.
    pub fn draw<D>(&self, target: &mut D, top_left: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let raw: ImageRaw<BinaryColor> = ImageRaw::new(&self.rows, ICON_SIZE);
        Image::new(&raw, top_left).draw(target)
    }
}

pub const ALARM_ON: Icon = Icon::new([
    0b0001_1000,
    0b0011_1100,
    0b0111_1110,
    0b0111_1110,
    0b0111_1110,
    0b0111_1110,
    0b1111_1111,
    0b0001_1000,
]);

/// Bell with a slash through it
pub const ALARM_OFF: Icon = Icon::new([
    0b0001_1000,
    0b0011_1100,
    0b0111_1010,
    0b0111_0110,
    0b0110_1110,
    0b0101_1110,
    0b1011_1111,
    0b0001_1000,
]);

pub const PLAY: Icon = Icon::new([
    0b0000_0000,
    0b1000_0000,
    0b1100_0000,
    0b1110_0000,
    0b1111_0000,
    0b1110_0000,
    0b1100_0000,
    0b1000_0000,
]);

pub const BACK: Icon = Icon::new([
    0b0010_0000,
    0b0110_0000,
    0b1111_1110,
    0b0110_0011,
    0b0010_0001,
    0b0000_0001,
    0b0000_0011,
    0b0011_1110,
]);

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    #[test]
    fn pixel_lookup_is_msb_first() {
        assert!(PLAY.is_set(0, 1));
        assert!(!PLAY.is_set(1, 1));
        assert!(PLAY.is_set(3, 4));
        assert!(!PLAY.is_set(4, 4));
        assert!(!PLAY.is_set(8, 4));
        assert!(!PLAY.is_set(0, 8));
    }

    #[test]
    fn draws_play_icon() {
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        PLAY.draw(&mut display, Point::zero()).unwrap();
        display.assert_pattern(&[
            "........",
            "#.......",
            "##......",
            "###.....",
            "####....",
            "###.....",
            "##......",
            "#.......",
        ]);
    }

    #[test]
    fn draws_at_offset() {
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        ALARM_ON.draw(&mut display, Point::new(2, 1)).unwrap();
        display.assert_pattern(&[
            "          ",
            "  ...##...",
            "  ..####..",
            "  .######.",
            "  .######.",
            "  .######.",
            "  .######.",
            "  ########",
            "  ...##...",
        ]);
        assert_eq!(display.get_pixel(Point::new(5, 0)), None);
        assert_eq!(display.get_pixel(Point::new(0, 4)), None);
        assert_eq!(display.get_pixel(Point::new(1, 8)), None);
    }

    #[test]
    fn alarm_off_differs_from_alarm_on() {
        assert_ne!(ALARM_ON, ALARM_OFF);
        assert_eq!(ALARM_ON.rows()[0], ALARM_OFF.rows()[0]);
        assert_eq!(BACK.rows()[2], 0b1111_1110);
    }
}
