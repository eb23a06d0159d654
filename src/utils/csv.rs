/// Quotes a CSV field when it contains the field separator, a double quote
/// or a line break. Embedded double quotes are doubled per RFC 4180.
pub fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Joins already-rendered field values into one CSV line.
pub fn csv_line<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fields
        .into_iter()
        .map(|f| csv_field(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_field_plain() {
        assert_eq!(csv_field("Ana Costa"), "Ana Costa");
        assert_eq!(csv_field(""), "");
    }

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("Costa, Ana"), "\"Costa, Ana\"");
        assert_eq!(csv_field("the \"deacon\""), "\"the \"\"deacon\"\"\"");
    }

    #[test]
    fn test_csv_line() {
        assert_eq!(
            csv_line(["Ana", "Youth", "1,2"]),
            "Ana,Youth,\"1,2\""
        );
    }
}
