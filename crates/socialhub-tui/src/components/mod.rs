pub mod search_bar;
pub mod spinner;
pub mod stat_card;
pub mod toast;

pub use search_bar::SearchBar;
pub use spinner::Spinner;
pub use stat_card::render_stat_card;
pub use toast::{Toast, ToastKind, ToastManager};
