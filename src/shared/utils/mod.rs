pub mod dom;
pub mod format;

pub use format::format_created_at;
