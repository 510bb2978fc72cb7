/// Minimum terminal width required (columns)
pub(super) const MIN_TERMINAL_WIDTH: u16 = 48;
/// Minimum terminal height required (rows)
pub(super) const MIN_TERMINAL_HEIGHT: u16 = 24;
/// Widest the lamp rows are drawn, whatever the terminal size.
pub(super) const CLOCK_WIDTH: u16 = 56;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum InputMode {
    Normal,
    Help,
}

pub(super) fn fits(width: u16, height: u16) -> bool {
    width >= MIN_TERMINAL_WIDTH && height >= MIN_TERMINAL_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::fits;

    #[test]
    fn fits_requires_both_dimensions() {
        assert!(fits(48, 24));
        assert!(fits(120, 40));
        assert!(!fits(47, 24));
        assert!(!fits(48, 23));
    }
}
