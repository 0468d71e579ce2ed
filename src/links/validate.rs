use url::Url;

pub const MAX_TITLE_LENGTH: usize = 60;
pub const MAX_CODE_LENGTH: usize = 8;

// Human-readable labels used in validation error messages, keyed by field.
const TITLE_LABEL: &str = "Title";
const ORIGINAL_LINK_LABEL: &str = "Original Link";
const LINK_CODE_LABEL: &str = "Short Code";

/// Field checks for `create`. Returns the labels of every failing field, in
/// validation order, so the caller can report them in a single message.
pub fn validate_create(
    title: Option<&str>,
    original_link: Option<&str>,
    link_code: Option<&str>,
) -> Vec<&'static str> {
    let mut fields = Vec::new();

    if title.is_some_and(|t| t.len() > MAX_TITLE_LENGTH) {
        fields.push(TITLE_LABEL);
    }

    if !original_link.is_some_and(is_absolute_url) {
        fields.push(ORIGINAL_LINK_LABEL);
    }

    // An absent or empty code means "generate one"; only a supplied code is
    // length-checked here.
    if link_code.is_some_and(|c| c.len() > MAX_CODE_LENGTH) {
        fields.push(LINK_CODE_LABEL);
    }

    fields
}

/// Field checks for `update`. Unlike `create`, the code is required: an
/// update cannot clear it.
pub fn validate_update(title: Option<&str>, link_code: Option<&str>) -> Vec<&'static str> {
    let mut fields = Vec::new();

    if title.is_some_and(|t| t.len() > MAX_TITLE_LENGTH) {
        fields.push(TITLE_LABEL);
    }

    if !link_code.is_some_and(|c| !c.is_empty() && c.len() <= MAX_CODE_LENGTH) {
        fields.push(LINK_CODE_LABEL);
    }

    fields
}

fn is_absolute_url(s: &str) -> bool {
    Url::parse(s).is_ok()
}
