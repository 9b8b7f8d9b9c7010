use std::fmt::Write;

use crate::geometry::Sweep;
use crate::math::Point2;

/// One command of the move/line/arc path mini-language.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// `M x,y`
    MoveTo(Point2),
    /// `L x,y`
    LineTo(Point2),
    /// `A r,r,0,0,sweep,x,y`: small circular arc to `to`.
    ArcTo { radius: f64, sweep: Sweep, to: Point2 },
}

impl PathCommand {
    /// Appends this command to `out` with numbers rounded to `precision`
    /// decimal places.
    pub fn write_to(&self, out: &mut String, precision: usize) {
        match self {
            Self::MoveTo(p) => {
                let _ = write!(out, "M {}", format_point(p, precision));
            }
            Self::LineTo(p) => {
                let _ = write!(out, "L {}", format_point(p, precision));
            }
            Self::ArcTo { radius, sweep, to } => {
                let r = format_number(*radius, precision);
                let _ = write!(
                    out,
                    "A {r},{r},0,0,{},{}",
                    sweep.flag(),
                    format_point(to, precision)
                );
            }
        }
    }

    /// End point of the command.
    #[must_use]
    pub fn end(&self) -> Point2 {
        match self {
            Self::MoveTo(p) | Self::LineTo(p) | Self::ArcTo { to: p, .. } => *p,
        }
    }
}

fn format_point(p: &Point2, precision: usize) -> String {
    format!(
        "{},{}",
        format_number(p.x, precision),
        format_number(p.y, precision)
    )
}

/// Formats `value` rounded to `precision` decimals, without trailing zeros.
///
/// Negative zero prints as `0`.
#[must_use]
pub fn format_number(value: f64, precision: usize) -> String {
    let mut s = format!("{value:.precision$}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}
