pub mod error;
pub mod icon;
pub mod icon_set;

pub use error::IconError;
pub use icon::{create_icon, render_icon, save_icon, ICON_COLOR};
pub use icon_set::{IconSet, IconSpec, DEFAULT_OUT_DIR, STANDARD_SIZES};
