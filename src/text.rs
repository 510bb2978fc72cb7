use crate::clock::{LampState, Row};
use crate::common::lamps::{LampColour, lamp_colour};

const LINE_WIDTH: usize = 21;

fn lamp_char(row: Row, index: usize, value: u8) -> char {
    match (value, lamp_colour(row, index)) {
        (1, LampColour::Red) => 'R',
        (1, LampColour::Yellow) => 'Y',
        _ => '.',
    }
}

fn centered(line: &str) -> String {
    let pad = LINE_WIDTH.saturating_sub(line.chars().count()) / 2;
    format!("{}{line}", " ".repeat(pad))
}

/// Draws the clock as five lines of characters: `O` for the lit seconds lamp,
/// `R`/`Y` for lit red/yellow lamps and `.` for dark ones.
pub fn render_text(state: &LampState) -> String {
    let mut lines = vec![centered(if state.seconds_lit() { "O" } else { "." })];
    for row in Row::ALL {
        let lamps: Vec<String> = state
            .row(row)
            .iter()
            .enumerate()
            .map(|(idx, &value)| lamp_char(row, idx, value).to_string())
            .collect();
        lines.push(centered(&lamps.join(" ")));
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn render_json(state: &LampState) -> serde_json::Result<String> {
    serde_json::to_string(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::convert;

    #[test]
    fn render_text_draws_known_time() {
        let state = convert("17:49:21").unwrap();
        let expected = [
            "          O",
            "       R R R .",
            "       R R . .",
            "Y Y R Y Y R Y Y R . .",
            "       Y Y Y Y",
            "",
        ]
        .join("\n");
        assert_eq!(render_text(&state), expected);
    }

    #[test]
    fn render_text_midnight_is_dark() {
        let text = render_text(&LampState::default());
        assert!(!text.contains(['O', 'R', 'Y']));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn render_json_uses_wire_names() {
        let json = render_json(&convert("01:00:00").unwrap()).unwrap();
        assert_eq!(
            json,
            "{\"seconds\":0,\"fiveHours\":[0,0,0,0],\"oneHours\":[1,0,0,0],\
             \"fiveMinutes\":[0,0,0,0,0,0,0,0,0,0,0],\"oneMinutes\":[0,0,0,0]}"
        );
    }
}
