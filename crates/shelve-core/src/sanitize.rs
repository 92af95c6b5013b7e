//! Path-segment and filename sanitization for library placement.

/// Characters that are never allowed in a library path segment or filename.
const FORBIDDEN: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Sanitizes a directory segment or a full filename (extension included).
///
/// - Removes `< > : " / \ | ? *`
/// - Collapses each run of whitespace into a single space
/// - Trims leading/trailing whitespace
///
/// The extension is not treated specially; callers pass `"Title.ext"` as a
/// whole when sanitizing a filename.
pub fn sanitize_path_component(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_space = false;

    for c in name.chars() {
        if FORBIDDEN.contains(&c) {
            continue;
        }
        if c.is_whitespace() {
            if !prev_space {
                out.push(' ');
            }
            prev_space = true;
        } else {
            out.push(c);
            prev_space = false;
        }
    }

    out.trim().to_string()
}
