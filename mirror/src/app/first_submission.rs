//! First-submission detection

use crate::app::templates::is_attributed_to;
use crate::domain::entities::MirroredIssueRecord;

/// Whether `submitter` has never been mirrored before
///
/// A record counts as theirs if the tracker lists them as its author or if
/// its body carries their attribution line (mirrors are normally opened by a
/// bot account).
///
/// Fails open: an unavailable listing (`None`) yields `true`. This is the
/// opposite direction from duplicate detection on purpose; a spurious
/// welcome banner costs less than a lost submission.
pub fn is_first_submission(
    submitter: Option<&str>,
    submissions: Option<&[MirroredIssueRecord]>,
) -> bool {
    let Some(submitter) = submitter.filter(|s| !s.is_empty()) else {
        return false;
    };
    let Some(submissions) = submissions else {
        return true;
    };

    !submissions.iter().any(|record| {
        record.author.as_deref() == Some(submitter) || is_attributed_to(&record.body, submitter)
    })
}
