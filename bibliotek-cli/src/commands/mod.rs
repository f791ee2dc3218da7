//! CLI command implementations

mod list;
mod login;
mod read;
mod render;
mod stats;

pub use list::list;
pub use login::{login_admin, login_student};
pub use read::read;
pub use render::render;
pub use stats::stats;
