//! Startup banner: the app name in figlet letters, shaded column by column.

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{self, Write, stdout};

const TITLE: &str = "INVITES";
const SUBTITLE: &str = "Arabic invitation letters";

/// Two-stop horizontal shade, deep teal (#0b6e4f) into sand gold (#e0b04a).
struct Shade {
    from: [u8; 3],
    to: [u8; 3],
}

const SHADE: Shade = Shade {
    from: [0x0b, 0x6e, 0x4f],
    to: [0xe0, 0xb0, 0x4a],
};

impl Shade {
    /// Color of column `col` in a row `width` columns wide.
    fn at(&self, col: usize, width: usize) -> Color {
        let span = width.saturating_sub(1).max(1) as u32;
        let pos = (col as u32).min(span);
        let [r, g, b] = std::array::from_fn(|i| {
            let (a, z) = (u32::from(self.from[i]), u32::from(self.to[i]));
            ((a * (span - pos) + z * pos + span / 2) / span) as u8
        });
        Color::Rgb { r, g, b }
    }
}

fn figure() -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(TITLE).map(|f| f.to_string()))
        .unwrap_or_else(|| format!("{}\n", TITLE))
}

fn draw(out: &mut impl Write, art: &str) -> io::Result<()> {
    let width = art.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    for line in art.lines() {
        for (col, ch) in line.chars().enumerate() {
            queue!(out, SetForegroundColor(SHADE.at(col, width)), Print(ch))?;
        }
        queue!(out, ResetColor, Print("\r\n"))?;
    }
    queue!(
        out,
        SetForegroundColor(SHADE.at(width, width)),
        Print(format!("v{}  {}\r\n", env!("CARGO_PKG_VERSION"), SUBTITLE)),
        ResetColor
    )?;
    out.flush()
}

/// Prints the banner. A terminal that rejects the escape codes just gets
/// no banner.
pub fn print_welcome() {
    let _ = draw(&mut stdout(), &figure());
}
