pub mod providers;
pub mod selection;

pub use providers::{MovieProvider, TmdbProvider};
pub use selection::select_random;
