use crate::clock::Row;

/// Colour a lamp shows when lit. Hour lamps and the quarter-hour lamps of the
/// five-minute row are red, everything else yellow.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LampColour {
    Red,
    Yellow,
}

pub fn lamp_colour(row: Row, index: usize) -> LampColour {
    if row.counts_hours() || row.is_quarter_lamp(index) {
        LampColour::Red
    } else {
        LampColour::Yellow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_rows_are_red() {
        for row in [Row::FiveHours, Row::OneHours] {
            assert!((0..row.len()).all(|idx| lamp_colour(row, idx) == LampColour::Red));
        }
    }

    #[test]
    fn minute_rows_are_yellow_except_quarters() {
        let colours: Vec<_> = (0..11).map(|idx| lamp_colour(Row::FiveMinutes, idx)).collect();
        let reds: Vec<_> = colours
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == LampColour::Red)
            .map(|(idx, _)| idx)
            .collect();
        assert_eq!(reds, vec![2, 5, 8]);
        assert_eq!(lamp_colour(Row::OneMinutes, 2), LampColour::Yellow);
    }
}
