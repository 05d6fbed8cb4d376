pub mod types;
pub mod traits;
pub mod fetcher;
pub mod catalog;
pub mod selector;
pub mod state;
pub mod display;
pub mod viewer;

pub use types::*;
pub use traits::ArtworkSource;
pub use fetcher::Fetcher;
pub use catalog::{load_pool, IdentifierPool};
pub use selector::{AttemptBudget, CandidateSelector};
pub use state::{FormInputs, SelectionState, ViewerState};
pub use viewer::Viewer;
