pub mod flex;
pub mod page;
pub mod theme;

pub use flex::{Arrangement, FlexDirection, JustifyContent};
pub use page::{PageLayout, PageStyles};
pub use theme::{Theme, ThemeColors, ThemeFonts};
