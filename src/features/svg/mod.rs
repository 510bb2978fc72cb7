use crate::clock::{LampState, Row};
use crate::common::lamps::{LampColour, lamp_colour};

/// Drawing proportions are expressed in units of `width / 54`.
const GRID: f64 = 54.0;
const BEACON_RADIUS: f64 = 9.0;
const RING_WIDTH: f64 = 1.5;
const ROWS_TOP: f64 = 20.0;
const ROW_HEIGHT: f64 = 11.0;
const ROW_GAP: f64 = 3.0;
const LAMP_GAP: f64 = 1.5;
const SPACER_WIDTH: f64 = 13.0;
const SPACER_LEFT: f64 = 7.0;
const SPACER_RIGHT: f64 = 33.0;
const STEM_WIDTH: f64 = 8.0;
const TOTAL_HEIGHT: f64 = 84.0;

const FRAME: &str = "silver";
const RED: &str = "#e0301e";
const YELLOW: &str = "#f5c518";
const DARK: &str = "#3a3a3a";

pub fn height_for(width: u32) -> u32 {
    (f64::from(width) * TOTAL_HEIGHT / GRID).round() as u32
}

/// Renders a complete standalone SVG document for `state`.
pub fn render(state: &LampState, width: u32) -> String {
    let u = f64::from(width) / GRID;
    let height = height_for(width);
    let mut out = String::new();

    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n"
    ));
    out.push_str(&format!(
        "  <title>Berlin Uhr {:02}:{:02}</title>\n",
        state.hours(),
        state.minutes()
    ));

    draw_beacon(&mut out, state, u);
    for (idx, row) in Row::ALL.into_iter().enumerate() {
        draw_row(&mut out, state, row, idx, u);
        if idx + 1 < Row::ALL.len() {
            draw_spacers(&mut out, idx, u);
        }
    }
    draw_stem(&mut out, u, f64::from(height));

    out.push_str("</svg>\n");
    out
}

fn draw_beacon(out: &mut String, state: &LampState, u: f64) {
    let cx = GRID / 2.0 * u;
    let cy = BEACON_RADIUS * u;
    let ring_radius = (BEACON_RADIUS - RING_WIDTH / 2.0) * u;
    let lamp_radius = (BEACON_RADIUS - RING_WIDTH) * u;

    // Pedestal joining the ring to the top row, between 60° and 120°.
    let half = BEACON_RADIUS * u * 60f64.to_radians().cos();
    let top = cy + BEACON_RADIUS * u * 60f64.to_radians().sin();
    out.push_str(&format!(
        "  <rect class=\"frame\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{FRAME}\"/>\n",
        num(cx - half),
        num(top),
        num(half * 2.0),
        num(ROWS_TOP * u - top),
    ));
    out.push_str(&format!(
        "  <circle class=\"frame\" cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"none\" stroke=\"{FRAME}\" stroke-width=\"{}\"/>\n",
        num(cx),
        num(cy),
        num(ring_radius),
        num(RING_WIDTH * u),
    ));

    let (class, fill) = if state.seconds_lit() {
        ("on", YELLOW)
    } else {
        ("off", DARK)
    };
    out.push_str(&format!(
        "  <circle class=\"lamp seconds {class}\" cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{fill}\"/>\n",
        num(cx),
        num(cy),
        num(lamp_radius),
    ));
}

fn draw_row(out: &mut String, state: &LampState, row: Row, idx: usize, u: f64) {
    let width = GRID * u;
    let top = row_top(idx) * u;
    let gap = LAMP_GAP * u;
    let count = row.len();
    let lamp_width = (width - (count as f64 + 1.0) * gap) / count as f64;
    let lamp_height = (ROW_HEIGHT - 2.0 * LAMP_GAP) * u;

    out.push_str(&format!(
        "  <rect class=\"frame\" x=\"0\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"{FRAME}\"/>\n",
        num(top),
        num(width),
        num(ROW_HEIGHT * u),
        num(2.0 * u),
    ));

    for (lamp, &value) in state.row(row).iter().enumerate() {
        let lit = value == 1;
        let fill = match (lit, lamp_colour(row, lamp)) {
            (false, _) => DARK,
            (true, LampColour::Red) => RED,
            (true, LampColour::Yellow) => YELLOW,
        };
        out.push_str(&format!(
            "  <rect class=\"lamp {} {}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"{fill}\"/>\n",
            row_class(row),
            if lit { "on" } else { "off" },
            num(gap + lamp as f64 * (lamp_width + gap)),
            num(top + gap),
            num(lamp_width),
            num(lamp_height),
            num(0.5 * u),
        ));
    }
}

fn draw_spacers(out: &mut String, idx: usize, u: f64) {
    let top = (row_top(idx) + ROW_HEIGHT) * u;
    for left in [SPACER_LEFT, SPACER_RIGHT] {
        out.push_str(&format!(
            "  <rect class=\"frame\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{FRAME}\"/>\n",
            num(left * u),
            num(top),
            num(SPACER_WIDTH * u),
            num(ROW_GAP * u),
        ));
    }
}

fn draw_stem(out: &mut String, u: f64, height: f64) {
    let top = (row_top(Row::ALL.len() - 1) + ROW_HEIGHT) * u;
    out.push_str(&format!(
        "  <rect class=\"frame\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{FRAME}\"/>\n",
        num((GRID - STEM_WIDTH) / 2.0 * u),
        num(top),
        num(STEM_WIDTH * u),
        num((height - top).max(0.0)),
    ));
}

fn row_top(idx: usize) -> f64 {
    ROWS_TOP + idx as f64 * (ROW_HEIGHT + ROW_GAP)
}

fn row_class(row: Row) -> &'static str {
    match row {
        Row::FiveHours => "five-hours",
        Row::OneHours => "one-hours",
        Row::FiveMinutes => "five-minutes",
        Row::OneMinutes => "one-minutes",
    }
}

/// Two decimals at most, without trailing zeros.
fn num(value: f64) -> String {
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}
