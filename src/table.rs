use scraper::{Html, Selector};

use crate::error::FetchError;

/// Unvalidated table straight out of the AJAX response HTML. Column
/// presence is a contract the cleaner checks explicitly; nothing here
/// assumes a particular column set.
#[derive(Debug)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// Extract the first `<table>` from `html`. The header row is the
/// first `<tr>` carrying `<th>` cells; every later row's `<td>` cells
/// become one string row.
pub fn extract_first_table(html: &str) -> Result<RawTable, FetchError> {
    let document = Html::parse_document(html);

    let sel_table = Selector::parse("table").map_err(|_| FetchError::parse("selector error"))?;
    let sel_tr = Selector::parse("tr").map_err(|_| FetchError::parse("selector error"))?;
    let sel_th = Selector::parse("th").map_err(|_| FetchError::parse("selector error"))?;
    let sel_td = Selector::parse("td").map_err(|_| FetchError::parse("selector error"))?;

    let table = document
        .select(&sel_table)
        .next()
        .ok_or_else(|| FetchError::parse("no table found in response"))?;

    let mut headers: Vec<String> = Vec::new();
    for tr in table.select(&sel_tr) {
        let hs: Vec<String> = tr
            .select(&sel_th)
            .map(|th| norm_text(&th.text().collect::<String>()))
            .filter(|s| !s.is_empty())
            .collect();
        if !hs.is_empty() {
            headers = hs;
            break;
        }
    }

    let mut rows: Vec<Vec<String>> = Vec::new();
    for tr in table.select(&sel_tr) {
        let cells: Vec<String> = tr
            .select(&sel_td)
            .map(|td| norm_text(&td.text().collect::<String>()))
            .collect();
        if cells.is_empty() {
            continue;
        }
        rows.push(cells);
    }

    if rows.is_empty() {
        return Err(FetchError::parse("no table found: table has zero data rows"));
    }

    Ok(RawTable { headers, rows })
}

/// Collapse whitespace and trim.
fn norm_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}
