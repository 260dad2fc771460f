//! Record types shared by the directory, booth and rendering layers.

mod booth;
mod lenient;
mod voter;

pub use booth::{BoothId, BoothVoter};
pub use voter::VoterRecord;
