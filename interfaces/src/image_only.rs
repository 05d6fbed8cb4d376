use crate::defs::AcceptancePolicy;
use crate::defs::ArtworkRecord;
use crate::defs::Rejection;
use crate::defs::Verdict;

pub struct ImageOnlyPolicy;

impl AcceptancePolicy for ImageOnlyPolicy {
    fn judge(record: &ArtworkRecord, _filter_active: bool) -> Verdict {
        // Anything we can draw is good enough.
        if record.has_image() {
            Verdict::Accept
        } else {
            Verdict::Reject(Rejection::NoImage)
        }
    }
}
