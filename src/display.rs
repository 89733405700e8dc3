use core::fmt::Write;

use embedded_graphics::mono_font::{ascii::FONT_6X10, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::{Baseline, Text};
use heapless::String;

use crate::icons::{self, ICON_SIZE};

/// Characters that fit beside an icon on a 128 px wide line of `FONT_6X10`.
pub const LINE_CHARS: usize = 19;

/// Everything the status screen shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Status<'a> {
    pub alarm_enabled: bool,
    pub song: &'a str,
    pub celsius: Option<f32>,
}

pub fn song_line(name: &str) -> String<LINE_CHARS> {
    let mut line = String::new();
    for c in name.chars() {
        if line.push(c).is_err() {
            break;
        }
    }
    line
}

pub fn temperature_line(celsius: Option<f32>) -> String<LINE_CHARS> {
    let mut line = String::new();
    // Anything past LINE_CHARS is cut off.
    match celsius {
        Some(c) => write!(line, "Temp: {:.1} C", c).ok(),
        None => write!(line, "Temp: --").ok(),
    };
    line
}

/// Draws the alarm/song/temperature status onto a 128x64 target.
pub struct StatusScreen {
    style: MonoTextStyle<'static, BinaryColor>,
}

impl StatusScreen {
    const TITLE: Point = Point::new(0, 0);
    const SONG: Point = Point::new(0, 24);
    const TEMPERATURE: Point = Point::new(0, 48);
    const TEXT_INDENT: i32 = ICON_SIZE as i32 + 4;

    pub fn new() -> Self {
        Self {
            style: MonoTextStyle::new(&FONT_6X10, BinaryColor::On),
        }
    }

    pub fn draw<D>(&self, target: &mut D, status: &Status<'_>) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        target.clear(BinaryColor::Off)?;

        let bell = if status.alarm_enabled {
            icons::ALARM_ON
        } else {
            icons::ALARM_OFF
        };
        bell.draw(target, Self::TITLE)?;
        let title = if status.alarm_enabled { "Alarm on" } else { "Alarm off" };
        self.text(target, title, Self::TITLE)?;

        Line::new(Point::new(0, 14), Point::new(127, 14))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(target)?;

        icons::PLAY.draw(target, Self::SONG)?;
        self.text(target, &song_line(status.song), Self::SONG)?;

        self.text(target, &temperature_line(status.celsius), Self::TEMPERATURE)?;
        Ok(())
    }

    fn text<D>(&self, target: &mut D, text: &str, row: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let at = Point::new(row.x + Self::TEXT_INDENT, row.y);
        Text::with_baseline(text, at, self.style, Baseline::Top).draw(target)?;
        Ok(())
    }
}

impl Default for StatusScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    #[test]
    fn song_line_truncates_long_names() {
        assert_eq!(song_line("Alarm").as_str(), "Alarm");
        assert_eq!(song_line("Highest in the Room").as_str(), "Highest in the Room");
        assert_eq!(song_line("A much longer song name than fits").len(), LINE_CHARS);
    }

    #[test]
    fn temperature_line_formats_one_decimal() {
        assert_eq!(temperature_line(Some(24.73)).as_str(), "Temp: 24.7 C");
        assert_eq!(temperature_line(Some(-3.0)).as_str(), "Temp: -3.0 C");
        assert_eq!(temperature_line(None).as_str(), "Temp: --");
        let overflow = temperature_line(Some(1.0e12));
        assert!(overflow.starts_with("Temp: "));
        assert!(overflow.len() <= LINE_CHARS);
    }

    fn render(status: &Status<'_>) -> MockDisplay<BinaryColor> {
        let mut display = MockDisplay::new();
        display.set_allow_out_of_bounds_drawing(true);
        display.set_allow_overdraw(true);
        StatusScreen::new().draw(&mut display, status).unwrap();
        display
    }

    #[test]
    fn bell_icon_follows_alarm_switch() {
        let mut status = Status {
            alarm_enabled: true,
            song: "Alarm",
            celsius: Some(21.5),
        };
        let on = render(&status);
        assert_eq!(on.get_pixel(Point::new(5, 2)), Some(BinaryColor::On));

        status.alarm_enabled = false;
        let off = render(&status);
        assert_eq!(off.get_pixel(Point::new(5, 2)), Some(BinaryColor::Off));
    }

    #[test]
    fn play_icon_sits_on_song_row() {
        let display = render(&Status {
            alarm_enabled: true,
            song: "Dies Irae",
            celsius: None,
        });
        assert_eq!(display.get_pixel(Point::new(0, 25)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(4, 25)), Some(BinaryColor::Off));
        assert_eq!(display.get_pixel(Point::new(20, 14)), Some(BinaryColor::On));
    }
}
