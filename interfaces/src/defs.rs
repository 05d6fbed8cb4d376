pub type ObjectId = u64;

/// Metadata for a single museum object, as far as the viewer cares about it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArtworkRecord {
    pub object_id: ObjectId,
    pub image: Option<String>,
    pub department: Option<String>,
    pub title: Option<String>,
    pub artist_display_name: Option<String>,
    pub object_date: Option<String>,
}

impl ArtworkRecord {
    /// Artist name with surrounding whitespace removed, `None` when blank.
    pub fn artist(&self) -> Option<&str> {
        self.artist_display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn has_image(&self) -> bool {
        self.image.as_deref().is_some_and(|image| !image.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    NoImage,
    ArtistFiltered { initial: char },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Reject(Rejection),
}

impl Verdict {
    pub fn is_accept(&self) -> bool {
        matches!(self, Verdict::Accept)
    }
}

// Object style note:
// Policies are stateless; declare an empty type, e.g.
// `struct BaselineAcceptancePolicy;`, and decide purely from the arguments.

pub trait AcceptancePolicy {
    fn judge(record: &ArtworkRecord, filter_active: bool) -> Verdict;
}
