//! Display task
//! Owns the SSD1306 OLED and redraws the active screen in full

use defmt::{info, warn};
use embassy_futures::select::select;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};
use embassy_time::{Duration, Timer};

use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;

use pico_msgbox::screen::{
    CHECK_SEGMENTS, CROSS_SEGMENTS, HEIGHT, LINE_SPACING, MAX_BODY_LINES, SPINNER_CENTER,
    SPINNER_RADIUS, SPINNER_SQUARE, STATUS_TEXT_POS, Spinner, TEXT_ORIGIN, WIDTH, WRAP_COLUMNS,
    spinner_square_origin,
};
use pico_msgbox::wrap::wrap;

use crate::config::LOADING_FRAME_MS;
use crate::state::{Screen, snapshot};

/// Signal for triggering a redraw
static REDRAW_SIGNAL: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Ask the display task to redraw from the current state
pub fn signal_redraw() {
    REDRAW_SIGNAL.signal(());
}

/// Type alias for the concrete display driver, generic over the I²C
/// implementation (the board mounts it upside down, hence Rotate180).
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Display task - renders the loading or message screen. While the busy
/// overlay is set the spinner animates at the frame cadence; otherwise
/// the panel is redrawn on demand.
#[embassy_executor::task]
pub async fn display_driver(i2c: I2c<'static, I2C0, Blocking>) -> ! {
    info!("Display task started");

    let interface = I2CDisplayInterface::new(i2c);
    let mut oled = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate180)
        .into_buffered_graphics_mode();
    if oled.init().is_err() {
        warn!("OLED init failed");
    }

    let mut spinner = Spinner::new();

    loop {
        match snapshot().await {
            Screen::Busy { status } => {
                draw_busy(&mut oled, status, &spinner);
                spinner.advance();
                let _ = select(
                    REDRAW_SIGNAL.wait(),
                    Timer::after(Duration::from_millis(LOADING_FRAME_MS)),
                )
                .await;
            }
            Screen::Message { body, ok } => {
                draw_message(&mut oled, body.as_str(), ok);
                REDRAW_SIGNAL.wait().await;
            }
        }
    }
}

fn text_style() -> embedded_graphics::mono_font::MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

fn outline() -> PrimitiveStyle<BinaryColor> {
    PrimitiveStyle::with_stroke(BinaryColor::On, 1)
}

/// One-pixel border around the cleared (black) panel.
fn draw_frame<I2C>(oled: &mut Display<I2C>)
where
    I2C: embedded_hal::i2c::I2c,
{
    let _ = Rectangle::new(Point::zero(), Size::new(WIDTH as u32, HEIGHT as u32))
        .into_styled(outline())
        .draw(oled);
}

/// Render the loading screen: spinner circle with the orbiting square
/// and a status line at the bottom.
fn draw_busy<I2C>(oled: &mut Display<I2C>, status: &str, spinner: &Spinner)
where
    I2C: embedded_hal::i2c::I2c,
{
    oled.clear_buffer();
    draw_frame(oled);

    let center = Point::new(SPINNER_CENTER.0, SPINNER_CENTER.1);
    let _ = Circle::with_center(center, (SPINNER_RADIUS * 2) as u32)
        .into_styled(outline())
        .draw(oled);

    let (x, y) = spinner_square_origin(spinner.angle());
    let square = Size::new(SPINNER_SQUARE as u32, SPINNER_SQUARE as u32);
    let _ = Rectangle::new(Point::new(x, y), square)
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(oled);

    let _ = Text::new(
        status,
        Point::new(STATUS_TEXT_POS.0, STATUS_TEXT_POS.1),
        text_style(),
    )
    .draw(oled);

    let _ = oled.flush();
}

/// Render the message screen: status icon top-right, wrapped body text.
fn draw_message<I2C>(oled: &mut Display<I2C>, body: &str, ok: bool)
where
    I2C: embedded_hal::i2c::I2c,
{
    oled.clear_buffer();
    draw_frame(oled);

    let segments = if ok { &CHECK_SEGMENTS } else { &CROSS_SEGMENTS };
    for ((x0, y0), (x1, y1)) in segments {
        let _ = Line::new(Point::new(*x0, *y0), Point::new(*x1, *y1))
            .into_styled(outline())
            .draw(oled);
    }

    let lines = wrap::<MAX_BODY_LINES>(body, WRAP_COLUMNS);
    for (row, line) in lines.iter().enumerate() {
        let y = TEXT_ORIGIN.1 + row as i32 * LINE_SPACING;
        let _ = Text::new(line, Point::new(TEXT_ORIGIN.0, y), text_style()).draw(oled);
    }

    let _ = oled.flush();
}
