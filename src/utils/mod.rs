mod render_target;
mod theme_state;

pub use render_target::{ DocumentBody, RenderTarget };
pub use theme_state::{ ThemeState, DARK_CLASS };
