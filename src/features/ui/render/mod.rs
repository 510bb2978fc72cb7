mod format;
mod header;
mod lamps;
mod overlays;

pub(super) use header::{draw_footer, draw_header};
pub(super) use lamps::draw_clock;
pub(super) use overlays::{draw_help_popup, draw_terminal_too_small};
