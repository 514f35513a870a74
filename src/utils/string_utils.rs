pub fn get_trimmed_string(value: Option<&String>) -> Option<String> {
    if let Some(v) = value {
        let trimmed = v.trim();
        if !trimmed.is_empty() {
            return Some(trimmed.to_string());
        }
    }
    None
}

/// Removes every double quote, turns line breaks into spaces and trims the result.
/// Applying it to an already clean value returns the value unchanged.
pub fn sanitize_cookie(cookie: &str) -> String {
    cookie.replace('"', "").replace(['\r', '\n'], " ").trim().to_string()
}

/// Keeps the first line of a value written after a directive or as the url line.
pub fn sanitize_directive_value(value: &str) -> String {
    value.trim()
        .split(['\r', '\n'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

// attribute values are double quoted inside the #EXTINF line
pub fn sanitize_attribute_value(value: &str) -> String {
    value.chars()
        .filter(|c| *c != '"')
        .map(|c| if c == '\r' || c == '\n' { ' ' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}

pub fn sanitize_title(title: &str) -> String {
    title.chars()
        .map(|c| if c == '\r' || c == '\n' { ' ' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}
