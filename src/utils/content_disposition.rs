// ============================================================================
// CONTENT-DISPOSITION - Filename extraction for file downloads
// ============================================================================

use chrono::Utc;

/// Filename announced by a `Content-Disposition` header.
///
/// `filename*=UTF-8''...` (RFC 5987) takes precedence over a plain `filename=`,
/// quoted or not. Path components are stripped.
pub fn parse_filename(header: &str) -> Option<String> {
    let mut plain = None;
    let mut extended = None;

    for part in header.split(';').map(str::trim) {
        let Some((name, value)) = part.split_once('=') else {
            continue;
        };
        match name.trim().to_ascii_lowercase().as_str() {
            "filename*" => extended = decode_extended(value.trim()),
            "filename" => plain = Some(unquote(value.trim())),
            _ => {}
        }
    }

    extended
        .or(plain)
        .map(|name| sanitize(&name))
        .filter(|name| !name.is_empty())
}

/// Name used when the server does not announce one: `<last segment>-<YYYYMMDD>.csv`
pub fn fallback_filename(path: &str) -> String {
    let stem = path
        .split('?')
        .next()
        .unwrap_or_default()
        .trim_end_matches('/')
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or("export");
    format!("{}-{}.csv", stem, Utc::now().format("%Y%m%d"))
}

fn unquote(value: &str) -> String {
    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value);
    value.replace("\\\"", "\"")
}

fn decode_extended(value: &str) -> Option<String> {
    // charset'language'percent-encoded
    let mut pieces = value.splitn(3, '\'');
    let charset = pieces.next()?;
    let _language = pieces.next()?;
    let encoded = pieces.next()?;
    if !charset.eq_ignore_ascii_case("utf-8") {
        return None;
    }
    urlencoding::decode(encoded).ok().map(|s| s.into_owned())
}

fn sanitize(name: &str) -> String {
    name.rsplit(['/', '\\']).next().unwrap_or(name).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_filename() {
        assert_eq!(
            parse_filename(r#"attachment; filename="employees.csv""#).as_deref(),
            Some("employees.csv")
        );
    }

    #[test]
    fn unquoted_filename() {
        assert_eq!(
            parse_filename("attachment; filename=payroll-2024-05.csv").as_deref(),
            Some("payroll-2024-05.csv")
        );
    }

    #[test]
    fn extended_filename_wins() {
        let header = r#"attachment; filename="fallback.csv"; filename*=UTF-8''n%C3%B3mina%20mayo.csv"#;
        assert_eq!(parse_filename(header).as_deref(), Some("nómina mayo.csv"));
    }

    #[test]
    fn strips_directories() {
        assert_eq!(
            parse_filename(r#"attachment; filename="../../etc/passwd""#).as_deref(),
            Some("passwd")
        );
    }

    #[test]
    fn no_filename_parameter() {
        assert_eq!(parse_filename("inline"), None);
        assert_eq!(parse_filename(r#"attachment; filename="""#), None);
    }

    #[test]
    fn fallback_uses_last_path_segment() {
        let name = fallback_filename("/api/company/export/attendance?from=2024-01-01");
        assert!(name.starts_with("attendance-"), "{name}");
        assert!(name.ends_with(".csv"));
        assert_eq!(name.len(), "attendance-".len() + 8 + ".csv".len());
    }
}
