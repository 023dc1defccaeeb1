pub mod count;
pub mod emotion;
pub mod feedback;

pub use count::CountEntry;
pub use emotion::Emotion;
pub use feedback::FeedbackRecord;
