//! Pipe-delimited table parsing.

use super::normalize_newlines;
use crate::model::TabularRecord;

/// Parse the first pipe table found in markdown or text.
///
/// The first line that starts and ends with `|` is the header. Later pipe
/// lines are data rows unless they contain `---`. Blank cells are dropped
/// before zipping against the header, so values shift left past them.
/// When no data row is found the fixed mock dataset is returned.
pub fn parse_table(content: &str) -> TabularRecord {
    let content = normalize_newlines(content);
    let mut headers: Option<Vec<String>> = None;
    let mut record = TabularRecord::new();

    for line in content.lines() {
        let line = line.trim();
        if !(line.starts_with('|') && line.ends_with('|')) {
            continue;
        }

        match &headers {
            None => headers = Some(split_cells(line)),
            Some(headers) => {
                if line.contains("---") {
                    continue;
                }
                record.push(TabularRecord::zip_row(headers, &split_cells(line)));
            }
        }
    }

    if record.is_empty() {
        log::debug!("no table rows found, using mock dataset");
        return TabularRecord::mock();
    }

    record
}

fn split_cells(line: &str) -> Vec<String> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(String::from)
        .collect()
}
