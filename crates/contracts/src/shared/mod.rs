pub mod slug;
pub mod video;
