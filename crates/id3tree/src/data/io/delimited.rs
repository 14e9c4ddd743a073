//! Delimited text loader.

use std::fs;
use std::path::Path;

use super::DatasetLoadError;
use crate::data::Dataset;

/// Delimiters considered when sniffing, in priority order.
pub const CANDIDATE_DELIMITERS: [char; 5] = [',', ';', '\t', '.', '|'];

/// Pick the candidate delimiter that occurs most often in `header`.
///
/// Earlier candidates win ties; `,` is returned when none occur.
pub fn detect_delimiter(header: &str) -> char {
    let mut best = CANDIDATE_DELIMITERS[0];
    let mut best_count = 0usize;
    for delim in CANDIDATE_DELIMITERS {
        let count = header.matches(delim).count();
        if count > best_count {
            best = delim;
            best_count = count;
        }
    }
    best
}

/// Read and parse a delimited file into a [`Dataset`].
pub fn read_delimited(path: impl AsRef<Path>) -> Result<Dataset, DatasetLoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| DatasetLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = parse_delimited(&text)?;
    tracing::info!(
        path = %path.display(),
        rows = dataset.n_rows(),
        attributes = dataset.n_attributes(),
        "loaded dataset"
    );
    Ok(dataset)
}

/// Parse delimited text (header line first) into a [`Dataset`].
///
/// Blank lines are skipped and every cell is trimmed.
pub fn parse_delimited(text: &str) -> Result<Dataset, DatasetLoadError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty());

    let (header_line, header) = lines.next().ok_or(DatasetLoadError::MissingHeader)?;
    let delimiter = detect_delimiter(header);
    let headers = split_line(header, delimiter, header_line)?;

    let mut rows = Vec::new();
    for (line_no, line) in lines {
        let cells = split_line(line, delimiter, line_no)?;
        if cells.len() != headers.len() {
            return Err(DatasetLoadError::RaggedLine {
                line: line_no,
                expected: headers.len(),
                got: cells.len(),
            });
        }
        rows.push((line_no, cells));
    }

    if rows.is_empty() {
        return Err(DatasetLoadError::NoRows);
    }

    Ok(Dataset::from_numbered_rows(headers, rows)?)
}

/// Split one line on `delimiter`, honouring double-quoted fields.
fn split_line(line: &str, delimiter: char, line_no: usize) -> Result<Vec<String>, DatasetLoadError> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else if c == '"' && current.trim().is_empty() {
            current.clear();
            in_quotes = true;
        } else if c == delimiter {
            cells.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(c);
        }
    }

    if in_quotes {
        return Err(DatasetLoadError::UnterminatedQuote { line: line_no });
    }
    cells.push(current.trim().to_string());
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a,b,c", ',')]
    #[case("a;b;c", ';')]
    #[case("a\tb\tc", '\t')]
    #[case("a|b|c", '|')]
    #[case("a,b;c;d", ';')]
    #[case("a;b,c", ',')]
    #[case("a.b|c", '.')]
    #[case("single", ',')]
    fn sniffs_delimiter(#[case] header: &str, #[case] expected: char) {
        assert_eq!(detect_delimiter(header), expected);
    }

    #[test]
    fn parses_and_trims_cells() {
        let text = "Weather ; Outlook ; Play\n Sunny ;Hot; No \n\nRain;Mild;Yes\n";
        let ds = parse_delimited(text).unwrap();
        assert_eq!(ds.headers(), &["Weather", "Outlook", "Play"]);
        assert_eq!(ds.n_rows(), 2);
        assert_eq!(ds.records()[0].cells(), &["Sunny", "Hot", "No"]);
        assert_eq!(ds.records()[1].outcome(), "Yes");
        // Source lines survive skipped blank lines.
        assert_eq!(ds.records()[0].line(), 2);
        assert_eq!(ds.records()[1].line(), 4);
    }

    #[test]
    fn honours_quoted_fields() {
        let text = "Name,Kind,Label\n\"Smith, J\",\"say \"\"hi\"\"\",yes\r\n";
        let ds = parse_delimited(text).unwrap();
        assert_eq!(ds.records()[0].cells(), &["Smith, J", "say \"hi\"", "yes"]);
    }

    #[test]
    fn reports_ragged_line_numbers() {
        let text = "A,B,C\nx,y,z\n\nx,y\n";
        match parse_delimited(text) {
            Err(DatasetLoadError::RaggedLine { line, expected, got }) => {
                assert_eq!((line, expected, got), (4, 3, 2));
            }
            other => panic!("expected ragged line error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_header_only_and_empty_input() {
        assert!(matches!(parse_delimited("A,B\n"), Err(DatasetLoadError::NoRows)));
        assert!(matches!(parse_delimited("\n  \n"), Err(DatasetLoadError::MissingHeader)));
        assert!(matches!(
            parse_delimited("A,B\n\"open,x\n"),
            Err(DatasetLoadError::UnterminatedQuote { line: 2 })
        ));
    }

    #[test]
    fn reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weather.csv");
        std::fs::write(&path, "Weather,Play\nSunny,No\nRain,Yes\n").unwrap();

        let ds = read_delimited(&path).unwrap();
        assert_eq!(ds.n_rows(), 2);

        let missing = read_delimited(dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(missing, DatasetLoadError::Io { .. }));
    }
}
