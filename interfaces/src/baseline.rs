use crate::defs::AcceptancePolicy;
use crate::defs::ArtworkRecord;
use crate::defs::Rejection;
use crate::defs::Verdict;

/// First half of the alphabet, dropped while the artist filter is on.
const FILTERED_INITIALS: std::ops::RangeInclusive<char> = 'a'..='m';

fn filtered_initial(artist: &str) -> Option<char> {
    let initial = artist.chars().next()?;
    let folded = initial.to_lowercase().next().unwrap_or(initial);
    FILTERED_INITIALS.contains(&folded).then_some(initial)
}

pub struct BaselineAcceptancePolicy;

impl AcceptancePolicy for BaselineAcceptancePolicy {
    fn judge(record: &ArtworkRecord, filter_active: bool) -> Verdict {
        if !record.has_image() {
            return Verdict::Reject(Rejection::NoImage);
        }
        if !filter_active {
            return Verdict::Accept;
        }
        // Blank names count as "Unknown" and always pass.
        match record.artist().and_then(filtered_initial) {
            Some(initial) => Verdict::Reject(Rejection::ArtistFiltered { initial }),
            None => Verdict::Accept,
        }
    }
}
