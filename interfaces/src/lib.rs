pub mod baseline;
pub mod defs;
pub mod image_only;
pub mod state;

pub use baseline::BaselineAcceptancePolicy;
pub use defs::{AcceptancePolicy, ArtworkRecord, ObjectId, Rejection, Verdict};
pub use image_only::ImageOnlyPolicy;
pub use state::RequestStatus;
