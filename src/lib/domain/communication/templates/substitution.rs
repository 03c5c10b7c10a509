//! Placeholder substitution

use super::PropertyMap;

/// Replaces every `{key}` token in `buffer` whose key is present in `props`
/// with the value's display form.
///
/// The buffer is scanned once from left to right. Substituted text is never
/// scanned again, so a value containing `{other}` is emitted as-is. Tokens
/// without a matching key are left untouched. Keys may contain braces; when
/// several keys match at the same position the longest one wins.
pub fn substitute(buffer: &str, props: &PropertyMap) -> String {
    if props.is_empty() {
        return buffer.to_string();
    }

    let mut output = String::with_capacity(buffer.len());
    let mut rest = buffer;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let token = props
            .iter()
            .filter(|(key, _)| {
                after.starts_with(key.as_str()) && after[key.len()..].starts_with('}')
            })
            .max_by_key(|(key, _)| key.len());

        match token {
            Some((key, value)) => {
                output.push_str(&value.to_string());
                rest = &after[key.len() + 1..];
            }
            None => {
                output.push('{');
                rest = after;
            }
        }
    }

    output.push_str(rest);
    output
}
