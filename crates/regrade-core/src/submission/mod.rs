mod file;
mod identity;

pub use file::FeedbackFile;
pub use identity::Identity;
