pub mod content;
pub mod media;
pub mod versions;
