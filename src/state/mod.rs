pub mod glide;
pub mod pointer;
pub mod scroll;

pub use glide::Glide;
pub use pointer::Pointer;
pub use scroll::ScrollTracker;
