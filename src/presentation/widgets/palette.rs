use ratatui::style::Color;

pub const SLATE_900: Color = Color::Rgb(0x0f, 0x17, 0x2a);
pub const SLATE_800: Color = Color::Rgb(0x1e, 0x29, 0x3b);
pub const SLATE_600: Color = Color::Rgb(0x47, 0x55, 0x69);
pub const SLATE_500: Color = Color::Rgb(0x64, 0x74, 0x8b);
pub const SLATE_400: Color = Color::Rgb(0x94, 0xa3, 0xb8);
pub const SLATE_100: Color = Color::Rgb(0xf1, 0xf5, 0xf9);
pub const PINE: Color = Color::Rgb(0x1a, 0x47, 0x2a);
pub const GOLD: Color = Color::Rgb(0xd4, 0xaf, 0x37);
pub const RED: Color = Color::Rgb(0xc4, 0x1e, 0x3a);
pub const WHITE: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const PAPER: Color = Color::Rgb(0xfd, 0xfb, 0xf5);

/// Mix `to` over `from` with the given weight in `[0, 1]`.
///
/// Only RGB colours can be mixed; anything else returns `to` unchanged once
/// the weight reaches one half and `from` below that.
pub fn blend(from: Color, to: Color, weight: f64) -> Color {
    let weight = weight.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| -> u8 {
                (f64::from(a) + (f64::from(b) - f64::from(a)) * weight).round() as u8
            };
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if weight >= 0.5 => to,
        _ => from,
    }
}
