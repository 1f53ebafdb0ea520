mod ui;
mod view;

pub use ui::UIState;
pub use view::ImageView;
