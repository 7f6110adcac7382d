//! Pastel ASCII banner with a pink-to-lavender gradient.
//! Uses figlet's built-in standard font.

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{self, Write, stdout};
use tracing::debug;

const TITLE: &str = "CONCEIVED?";
const TAGLINE: &str = "Pick a date, find out when it all began";

/// Blush Pink (#ff6fb5) and Lavender (#a47bff).
const GRADIENT: [(u8, u8, u8); 2] = [(0xff, 0x6f, 0xb5), (0xa4, 0x7b, 0xff)];

/// Color for row `row` of `rows`, blending the gradient top to bottom.
fn row_color(row: usize, rows: usize) -> Color {
    let [(r0, g0, b0), (r1, g1, b1)] = GRADIENT;
    let t = if rows <= 1 {
        1.0
    } else {
        row as f64 / (rows - 1) as f64
    };
    let mix = |from: u8, to: u8| (f64::from(from) + (f64::from(to) - f64::from(from)) * t).round() as u8;
    Color::Rgb {
        r: mix(r0, r1),
        g: mix(g0, g1),
        b: mix(b0, b1),
    }
}

fn banner_art() -> Option<String> {
    let font = FIGfont::standard().ok()?;
    font.convert(TITLE).map(|figure| figure.to_string())
}

/// Queue the art, version and tagline onto `out` and flush once.
fn write_banner(out: &mut impl Write, art: &str) -> io::Result<()> {
    let rows: Vec<&str> = art.lines().collect();
    for (i, row) in rows.iter().enumerate() {
        queue!(
            out,
            SetForegroundColor(row_color(i, rows.len())),
            Print(row),
            Print("\r\n")
        )?;
    }
    queue!(
        out,
        SetForegroundColor(row_color(1, 1)),
        Print(format!("v{}\r\n{}\r\n", env!("CARGO_PKG_VERSION"), TAGLINE)),
        ResetColor
    )?;
    out.flush()
}

/// Prints the welcome banner. Falls back to the plain title if the font cannot be loaded.
pub fn print_welcome() {
    let art = banner_art().unwrap_or_else(|| TITLE.to_string());
    if let Err(e) = write_banner(&mut stdout(), &art) {
        debug!(error = %e, "banner not printed");
    }
}
