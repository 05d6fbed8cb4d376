use crate::state::ViewerState;
use crate::types::{DisplayedArtwork, FetchedRecord, RequestStatus};

pub const UNKNOWN_ARTIST: &str = "Unknown";

/// Build the on-screen card for an accepted record.
pub fn artwork_from_record(fetched: &FetchedRecord) -> DisplayedArtwork {
    let record = &fetched.record;
    DisplayedArtwork {
        object_id: record.object_id,
        image: record.image.clone().unwrap_or_default(),
        artist: artist_label(record.artist_display_name.as_deref()),
        year: record.object_date.clone().unwrap_or_default(),
        title: record.title.clone().unwrap_or_default(),
        department: record.department.clone().unwrap_or_default(),
        fetched_at: fetched.fetch_time,
        response_time_ms: fetched.response_time_ms,
    }
}

pub fn artist_label(artist: Option<&str>) -> String {
    match artist {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => UNKNOWN_ARTIST.to_string(),
    }
}

/// "Artist (year)", or just the artist when there is no date.
pub fn artist_line(artwork: &DisplayedArtwork) -> String {
    if artwork.year.is_empty() {
        artwork.artist.clone()
    } else {
        format!("{} ({})", artwork.artist, artwork.year)
    }
}

/// The toggle is labelled with what pressing it will do.
pub fn filter_toggle_label(filter_active: bool) -> &'static str {
    if filter_active {
        "Show All Artists"
    } else {
        "Only N-Z or Unknown"
    }
}

pub fn status_text(status: &RequestStatus) -> String {
    match status {
        RequestStatus::Idle => "Idle".to_string(),
        RequestStatus::Loading => "Loading...".to_string(),
        RequestStatus::Success => "Success".to_string(),
        RequestStatus::Error(message) => format!("Error: {}", message),
        RequestStatus::RetryBoundExceeded { attempts } => {
            format!("No matching artwork found after {} tries", attempts)
        }
    }
}

pub fn render_artwork(artwork: &DisplayedArtwork) -> String {
    let mut lines = vec![
        format!("[image] {}", artwork.image),
        artist_line(artwork),
    ];
    if !artwork.title.is_empty() {
        lines.push(artwork.title.clone());
    }
    if !artwork.department.is_empty() {
        lines.push(artwork.department.clone());
    }
    lines.push(format!(
        "(object {}, fetched {} in {}ms)",
        artwork.object_id,
        artwork.fetched_at.format("%H:%M:%S"),
        artwork.response_time_ms
    ));
    lines.join("\n")
}

pub fn controls_line(state: &ViewerState) -> String {
    let next = if state.can_advance() {
        "[n] Next Picture"
    } else {
        "[n] Next Picture (disabled)"
    };
    format!(
        "{}  [r] Reset  [f] {}  [s] Set input  [h] Help  [q] Quit",
        next,
        filter_toggle_label(state.selection.filter_active)
    )
}

/// Whole screen: card (if any), status and controls.
pub fn render_screen(state: &ViewerState) -> String {
    let mut sections = Vec::new();
    if let Some(artwork) = &state.artwork {
        sections.push(render_artwork(artwork));
    }
    sections.push(format!("Status: {}", status_text(&state.status)));
    sections.push(controls_line(state));
    sections.join("\n\n")
}
