//! SSD1309 OLED operating screen (SPI, SSD1306-compatible driver).
//!
//! Layout of the operating screen:
//! ```text
//! +--------------------+
//! | *******  | PSET A  |
//! | **TIP**  | TEMP 300C
//! | *******  | HEAT *  |
//! | *******  | COOL    |
//! +--------------------+
//!   [=====bar ]   103W
//! ```
//! The left cell is the large tip-temperature readout, the right cell
//! mirrors the live configuration. All draws land in the buffered
//! frame and are committed by `refresh`.

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;
use heapless::String;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::Ssd1306;

use crate::config::{IRON_MAX_TEMP, IRON_MAX_WATT, IRON_START_TEMP};
use crate::error::Error;
use crate::ops::TempScale;
use crate::ui::panel::{fixed_field, StatusPanel};

/// Concrete display driver type.
pub type Screen<SPI, DC> =
    Ssd1306<SPIInterface<SPI, DC>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

// Operating screen geometry
const STATUS_COL_X: i32 = 68;
const PSET_LINE_Y: i32 = 14;
const TEMP_LINE_Y: i32 = 24;
const HEAT_LINE_Y: i32 = 34;
const COOL_LINE_Y: i32 = 44;
const TIP_TEMP_POS: Point = Point::new(10, 32);
const BORDER: Rectangle = Rectangle::new(Point::new(0, 4), Size::new(128, 40));
const DIVIDER_X: i32 = 62;
const PWR_BAR_POS: Point = Point::new(4, 48);
const PWR_BAR_W: u32 = 50;
const PWR_BAR_H: u32 = 8;
const WATT_TEXT_POS: Point = Point::new(68, 56);

/// Buffered operating screen plus the values it mirrors.
pub struct OledPanel<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    display: Screen<SPI, DC>,
    preset: Option<char>,
    set_temp: u32,
    scale: TempScale,
    heating: bool,
    tip_temp: u32,
    watts: u32,
}

impl<SPI, DC> OledPanel<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    /// Initialise the display and clear the frame.
    pub fn new(spi: SPI, dc: DC) -> Result<Self, Error> {
        let interface = SPIInterface::new(spi, dc);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        display.init().map_err(|_| Error::Display)?;
        display.clear_buffer();
        display.flush().map_err(|_| Error::Display)?;

        Ok(Self {
            display,
            preset: None,
            set_temp: IRON_START_TEMP,
            scale: TempScale::Celsius,
            heating: true,
            tip_temp: 0,
            watts: 0,
        })
    }

    /// Board / firmware info shown briefly at power-on.
    pub fn draw_start_screen(&mut self) {
        self.display.clear_buffer();
        let style = small_style();
        let _ = Text::new("200W-JBC Ver 3.1", Point::new(0, 10), style).draw(&mut self.display);
        let _ = Text::new(concat!("F/W Ver ", env!("CARGO_PKG_VERSION")), Point::new(0, 24), style)
            .draw(&mut self.display);
        let _ = Text::new("FRAXSYS ENG.", Point::new(0, 38), style).draw(&mut self.display);
        let _ = self.display.flush();
    }

    /// Update the measured tip temperature readout.
    pub fn show_tip_temp(&mut self, temp: u32) {
        if temp <= IRON_MAX_TEMP {
            self.tip_temp = temp;
        }
    }

    /// Update the heater power readout (watts; bar scales to full power).
    pub fn show_power(&mut self, watts: u32) {
        if watts <= IRON_MAX_WATT {
            self.watts = watts;
        }
    }

    fn draw_op_screen(&mut self) {
        self.display.clear_buffer();
        let small = small_style();
        let outline = PrimitiveStyle::with_stroke(BinaryColor::On, 1);

        // border and cell divider
        let _ = BORDER.into_styled(outline).draw(&mut self.display);
        let _ = Line::new(Point::new(DIVIDER_X, 4), Point::new(DIVIDER_X, 43))
            .into_styled(outline)
            .draw(&mut self.display);

        // tip temperature, large font
        if let Some(field) = fixed_field(self.tip_temp) {
            let big = MonoTextStyle::new(&FONT_10X20, BinaryColor::On);
            let _ = Text::new(field.as_str(), TIP_TEMP_POS, big).draw(&mut self.display);
        }

        // status column
        let mut pset: String<8> = String::new();
        let _ = pset.push_str("PSET ");
        let _ = pset.push(self.preset.unwrap_or(' '));
        let _ = Text::new(pset.as_str(), Point::new(STATUS_COL_X, PSET_LINE_Y), small)
            .draw(&mut self.display);

        if let Some(field) = fixed_field(self.set_temp) {
            let mut temp: String<10> = String::new();
            let _ = temp.push_str("TEMP ");
            let _ = temp.push_str(field.as_str());
            let _ = temp.push(self.scale.as_char());
            let _ = Text::new(temp.as_str(), Point::new(STATUS_COL_X, TEMP_LINE_Y), small)
                .draw(&mut self.display);
        }

        let heat = if self.heating { "HEAT *" } else { "HEAT" };
        let cool = if self.heating { "COOL" } else { "COOL *" };
        let _ = Text::new(heat, Point::new(STATUS_COL_X, HEAT_LINE_Y), small)
            .draw(&mut self.display);
        let _ = Text::new(cool, Point::new(STATUS_COL_X, COOL_LINE_Y), small)
            .draw(&mut self.display);

        // power bar and wattage text
        let _ = Rectangle::new(
            PWR_BAR_POS - Point::new(1, 1),
            Size::new(PWR_BAR_W + 2, PWR_BAR_H + 2),
        )
        .into_styled(outline)
        .draw(&mut self.display);
        let fill = PWR_BAR_W * self.watts / IRON_MAX_WATT;
        if fill > 0 {
            let _ = Rectangle::new(PWR_BAR_POS, Size::new(fill, PWR_BAR_H))
                .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
                .draw(&mut self.display);
        }
        if let Some(field) = fixed_field(self.watts) {
            let mut watts: String<4> = String::new();
            let _ = watts.push_str(field.as_str());
            let _ = watts.push('W');
            let _ = Text::new(watts.as_str(), WATT_TEXT_POS, small).draw(&mut self.display);
        }
    }
}

impl<SPI, DC> StatusPanel for OledPanel<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    fn show_preset(&mut self, letter: Option<char>) {
        self.preset = letter;
    }

    fn show_set_temp(&mut self, temp: u32) {
        if temp <= IRON_MAX_TEMP {
            self.set_temp = temp;
        }
    }

    fn show_scale(&mut self, scale: TempScale) {
        self.scale = scale;
    }

    fn show_heating(&mut self, heating: bool) {
        self.heating = heating;
    }

    fn refresh(&mut self) {
        self.draw_op_screen();
        let _ = self.display.flush();
    }
}

fn small_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}
