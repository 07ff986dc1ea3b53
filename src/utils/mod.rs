// Shared CLI-side helpers: config loading and plain-text tables.
pub mod table {
    // Column widths: max of header and cell lengths.
    fn widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
        let mut w: Vec<usize> = headers.iter().map(|h| h.len()).collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate().take(w.len()) {
                w[i] = w[i].max(cell.len());
            }
        }
        w
    }

    fn rule(w: &[usize]) -> String {
        let mut s = String::from("+");
        for width in w {
            s.push_str(&"-".repeat(width + 2));
            s.push('+');
        }
        s
    }

    fn row_line(cells: &[String], w: &[usize]) -> String {
        let mut s = String::from("|");
        for (i, width) in w.iter().enumerate() {
            let cell = cells.get(i).map_or("", String::as_str);
            let pad = *width;
            s.push_str(&format!(" {cell:<pad$} |"));
        }
        s
    }

    /// Render headers and rows as a bordered ASCII table.
    #[must_use]
    pub fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
        let w = widths(headers, rows);
        let header_cells: Vec<String> = headers.iter().map(|h| (*h).to_string()).collect();
        let mut out = String::new();
        out.push_str(&rule(&w));
        out.push('\n');
        out.push_str(&row_line(&header_cells, &w));
        out.push('\n');
        out.push_str(&rule(&w));
        out.push('\n');
        for row in rows {
            out.push_str(&row_line(row, &w));
            out.push('\n');
        }
        out.push_str(&rule(&w));
        out
    }
}

pub mod config {
    use serde::Deserialize;
    use std::fs;
    use std::path::Path;

    #[derive(Debug, Clone, Deserialize, Default)]
    pub struct DataConfig {
        pub dir: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize, Default)]
    pub struct QueryConfig {
        pub default_format: Option<String>, // "text" | "json"
    }

    #[derive(Debug, Clone, Deserialize, Default)]
    pub struct Config {
        pub data: Option<DataConfig>,
        pub query: Option<QueryConfig>,
    }

    #[must_use]
    pub fn load_config_at(path: &Path) -> Option<Config> {
        let data = fs::read_to_string(path).ok()?;
        toml::from_str::<Config>(&data).ok()
    }

    #[must_use]
    pub fn load_config_near(root: &Path) -> Option<Config> {
        let p = root.join("costar-degrees.toml");
        if p.exists() {
            load_config_at(&p)
        } else {
            None
        }
    }
}
