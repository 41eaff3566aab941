//! Comment and body templates
//!
//! The three workflow comments are read by humans triaging mirrored issues
//! and must stay byte-for-byte stable.

/// Task checklist attached to every new mirror
pub const TASK_LIST_COMMENT: &str = "\
### Review checklist

- [ ] Reproduced the reported behaviour
- [ ] Confirmed the issue is in scope for the bounty program
- [ ] Checked for duplicates among earlier submissions
- [ ] Assessed severity and impact
- [ ] Scored the submission (see rubric below)
- [ ] Notified the submitter of the outcome
- [ ] Linked the fix, if one was made";

/// Scoring rubric attached to every new mirror
pub const SCORING_COMMENT: &str = "\
### Scoring

| Criterion | Points | Score |
|-----------|--------|-------|
| Severity | 0-40 | |
| Reproducibility | 0-20 | |
| Report quality | 0-20 | |
| Suggested fix | 0-20 | |
| **Total** | **0-100** | |

Reviewers: fill in the Score column and record the final total before closing this issue.";

/// Banner attached only when the submitter has never been mirrored before
pub const FIRST_SUBMISSION_COMMENT: &str = "\
:tada: **First submission!**

This is the submitter's first bounty report to be mirrored here. \
Please take extra care to give clear, friendly feedback.";

const SOURCE_PREFIX: &str = "Original issue: ";
const ATTRIBUTION_PREFIX: &str = "Submitted by ";

/// Line linking the mirror back to the original issue
///
/// The URL is embedded verbatim; duplicate detection searches mirror bodies
/// for it.
pub fn source_line(url: &str) -> String {
    format!("{}{}", SOURCE_PREFIX, url)
}

/// Line naming the submitter, linked to their profile when one is known
pub fn attribution_line(login: &str, profile_url: Option<&str>) -> String {
    match profile_url {
        Some(url) => format!("{}[@{}]({})", ATTRIBUTION_PREFIX, login, url),
        None => format!("{}@{}", ATTRIBUTION_PREFIX, login),
    }
}

/// Whether a mirror body carries the attribution line for `login`
///
/// Only the second line is considered: it is where the classifier writes the
/// attribution, and everything after it is the submitter's own text.
pub fn is_attributed_to(body: &str, login: &str) -> bool {
    let Some(line) = body.lines().nth(1).map(str::trim) else {
        return false;
    };
    let linked = format!("{}[@{}](", ATTRIBUTION_PREFIX, login);
    let plain = format!("{}@{}", ATTRIBUTION_PREFIX, login);
    line.starts_with(&linked) || line == plain
}

/// Comment posted on the original issue once it has been mirrored
pub fn acknowledgement(internal_number: u64) -> String {
    format!(
        "Thanks for your submission! It has been received and is now tracked for review as internal issue #{}.",
        internal_number
    )
}
