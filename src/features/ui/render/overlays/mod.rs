mod help;
mod terminal;

pub(in crate::features::ui) use help::draw_help_popup;
pub(in crate::features::ui) use terminal::draw_terminal_too_small;
