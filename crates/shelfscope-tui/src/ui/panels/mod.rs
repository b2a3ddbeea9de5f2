pub mod body;
pub mod filter_bar;
pub mod header;
pub mod pagination;
pub mod statusbar;
