/// Outcome of the most recent fetch attempt. Only drives user feedback.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
    RetryBoundExceeded { attempts: u32 },
}

impl RequestStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestStatus::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, RequestStatus::Error(_) | RequestStatus::RetryBoundExceeded { .. })
    }
}
