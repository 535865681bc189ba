use {
    crate::codes,
    std::io::{self, Write},
};

pub const MDN_URL: &str = "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status";

/// Minimum number of spaces between two columns.
const PADDING: usize = 2;

/// Builds the cells for one output row: the code, its reason phrase and, if
/// requested, a link to its MDN page.
pub fn status_line(code: u16, include_links: bool) -> Vec<String> {
    let mut cells = vec![
        code.to_string(),
        codes::reason(code).unwrap_or_default().to_string(),
    ];
    if include_links {
        cells.push(format!("{}/{}", MDN_URL, code));
    }
    cells
}

/// Collects rows and writes them with their columns lined up.
///
/// Every column but the last is padded to the width of its widest cell plus
/// [`PADDING`]. The last column is written as is, so lines never end in
/// whitespace.
#[derive(Default)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        let mut widths = Vec::<usize>::new();
        for row in &self.rows {
            // the last cell of a row never takes part in alignment
            let aligned = row.len().saturating_sub(1);
            if widths.len() < aligned {
                widths.resize(aligned, 0);
            }
            for (width, cell) in widths.iter_mut().zip(&row[..aligned]) {
                *width = (*width).max(cell.chars().count());
            }
        }

        for row in &self.rows {
            if let Some((last, cells)) = row.split_last() {
                for (cell, width) in cells.iter().zip(&widths) {
                    write!(out, "{:<1$}", cell, width + PADDING)?;
                }
                out.write_all(last.as_bytes())?;
            }
            out.write_all(b"\n")?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(table: &Table) -> String {
        let mut buf = Vec::new();
        table.write_to(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn line_without_link() {
        assert_eq!(status_line(404, false), ["404", "Not Found"]);
    }

    #[test]
    fn line_with_link() {
        assert_eq!(
            status_line(418, true),
            [
                "418",
                "I'm a teapot",
                "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/418",
            ]
        );
    }

    #[test]
    fn two_columns() {
        let mut table = Table::default();
        table.push(status_line(200, false));
        table.push(status_line(404, false));
        assert_eq!(render(&table), "200  OK\n404  Not Found\n");
    }

    #[test]
    fn middle_column_is_padded_to_widest() {
        let mut table = Table::default();
        table.push(status_line(200, true));
        table.push(status_line(404, true));
        assert_eq!(
            render(&table),
            concat!(
                "200  OK         https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/200\n",
                "404  Not Found  https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/404\n",
            )
        );
    }

    #[test]
    fn empty_table_writes_nothing() {
        assert_eq!(render(&Table::default()), "");
    }
}
