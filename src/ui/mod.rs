//! egui widgets: menu, option panel, status bar and the plot canvas.

pub mod panels;
pub mod plot;
