/// Phrase used when a status code has no entry in [`STATUS_PHRASES`].
pub const UNKNOWN_STATUS_PHRASE: &str = "Unknown Status Code";

const STATUS_PHRASES: [(i64, &str); 28] = [
    (200, "OK"),
    (201, "Created"),
    (202, "Accepted"),
    (204, "No Content"),
    (205, "Reset Content"),
    (206, "Partial Content"),
    (400, "Bad Request"),
    (401, "Unauthorized"),
    (403, "Forbidden"),
    (404, "Not Found"),
    (405, "Method Not Allowed"),
    (406, "Not Acceptable"),
    (408, "Request Timeout"),
    (409, "Conflict"),
    (412, "Precondition Failed"),
    (413, "Payload Too Large"),
    (417, "Expectation Failed"),
    (421, "Misdirected Request"),
    (422, "Unprocessable Content"),
    (428, "Precondition Required"),
    (429, "Too Many Requests"),
    (431, "Request Header Fields Too Large"),
    (500, "Internal Server Error"),
    (502, "Bad Gateway"),
    (503, "Service Unavailable"),
    (504, "Gateway Timeout"),
    (505, "HTTP Version Not Supported"),
    (511, "Network Authentication Required"),
];

/// Formats `code` as `"<code> <phrase>"`, falling back to
/// [`UNKNOWN_STATUS_PHRASE`] for codes outside the table.
#[must_use]
pub fn status_phrase(code: i64) -> String {
    let phrase = STATUS_PHRASES
        .iter()
        .find(|(known, _)| *known == code)
        .map_or(UNKNOWN_STATUS_PHRASE, |(_, phrase)| *phrase);
    format!("{} {}", code, phrase)
}
