pub mod action_bar;
pub mod entry_row;
