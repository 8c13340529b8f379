/// Pop the next whitespace-delimited token off `input`.
///
/// Leading whitespace is skipped; the cursor is left just past the token.
/// Returns `None` once only whitespace remains.
pub fn next_token<'a>(input: &mut &'a str) -> Option<&'a str> {
    let rest = input.trim_start();
    if rest.is_empty() {
        *input = rest;
        return None;
    }

    let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    let (token, tail) = rest.split_at(end);
    *input = tail;

    Some(token)
}
