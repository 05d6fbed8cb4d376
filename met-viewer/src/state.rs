use crate::display;
use crate::types::{DisplayedArtwork, FetchedRecord, ObjectId, RequestStatus, Result, ViewerError};
use tracing::debug;

pub const DEFAULT_IMAGE_SIZE: u32 = 300;

/// Current pick and whether the artist filter is on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub current_id: Option<ObjectId>,
    pub filter_active: bool,
}

/// Scratch form fields. Wiped by Reset and after every successful render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInputs {
    pub url: String,
    pub format: String,
    pub no_ads: String,
    pub no_cookie_banners: String,
    pub width: u32,
    pub height: u32,
}

impl Default for FormInputs {
    fn default() -> Self {
        Self {
            url: String::new(),
            format: String::new(),
            no_ads: String::new(),
            no_cookie_banners: String::new(),
            width: DEFAULT_IMAGE_SIZE,
            height: DEFAULT_IMAGE_SIZE,
        }
    }
}

impl FormInputs {
    pub fn set(&mut self, field: &str, value: &str) -> Result<()> {
        match field {
            "url" => self.url = value.to_string(),
            "format" => self.format = value.to_string(),
            "no_ads" => self.no_ads = value.to_string(),
            "no_cookie_banners" => self.no_cookie_banners = value.to_string(),
            "width" => self.width = parse_dimension(field, value)?,
            "height" => self.height = parse_dimension(field, value)?,
            other => {
                return Err(ViewerError::General(format!("Unknown input field: {}", other)));
            }
        }
        Ok(())
    }

    /// `https://` plus whatever was typed into the url field.
    pub fn full_url(&self) -> String {
        format!("https://{}", self.url)
    }
}

fn parse_dimension(field: &str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse()
        .map_err(|_| ViewerError::General(format!("{} must be a whole number, got {:?}", field, value)))
}

/// Everything the front end renders.
#[derive(Debug, Clone, Default)]
pub struct ViewerState {
    pub selection: SelectionState,
    pub status: RequestStatus,
    pub artwork: Option<DisplayedArtwork>,
    pub inputs: FormInputs,
    pub pool_size: usize,
    /// Bumped by every advance; results carrying an older value are stale.
    pub generation: u64,
}

impl ViewerState {
    pub fn with_filter(filter_active: bool) -> Self {
        Self {
            selection: SelectionState {
                current_id: None,
                filter_active,
            },
            ..Self::default()
        }
    }

    pub fn can_advance(&self) -> bool {
        self.pool_size > 0
    }

    /// Start a new advance and return its ticket.
    pub fn begin_advance(&mut self) -> u64 {
        self.generation += 1;
        self.status = RequestStatus::Loading;
        self.generation
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation == ticket
    }

    pub fn toggle_filter(&mut self) -> bool {
        self.selection.filter_active = !self.selection.filter_active;
        self.selection.filter_active
    }

    pub fn reset_inputs(&mut self) {
        self.inputs = FormInputs::default();
    }

    /// Replace the card with an accepted record.
    pub fn show(&mut self, fetched: &FetchedRecord) -> DisplayedArtwork {
        let artwork = display::artwork_from_record(fetched);
        debug!("Displaying object {}", artwork.object_id);
        self.artwork = Some(artwork.clone());
        self.status = RequestStatus::Success;
        self.reset_inputs();
        artwork
    }
}
