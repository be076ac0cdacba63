//! Menu rows and their display attributes

use crate::model::PathList;
use crate::utils::path::DirProbe;

/// Display attribute of one menu row, lowest to highest priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    Normal,
    /// Not an existing directory
    Invalid,
    /// Occurs more than once in the list
    Duplicate,
    /// Under the cursor
    Selected,
}

/// One rendered line of the path menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    pub index: usize,
    pub path: &'a str,
    pub style: RowStyle,
}

impl Row<'_> {
    pub fn is_selected(&self) -> bool {
        self.style == RowStyle::Selected
    }

    pub fn marker(&self) -> char {
        if self.is_selected() {
            '>'
        } else {
            ' '
        }
    }

    /// `<marker> <1-based index>. <path>`
    pub fn text(&self) -> String {
        format!("{} {}. {}", self.marker(), self.index + 1, self.path)
    }
}

/// Compute every row. Later rules override earlier ones: invalid, then
/// duplicate, then selected.
pub fn build_rows<'a>(paths: &'a PathList, cursor: usize, probe: &dyn DirProbe) -> Vec<Row<'a>> {
    let counts = paths.occurrences();

    paths
        .iter()
        .enumerate()
        .map(|(index, path)| {
            let mut style = RowStyle::Normal;
            if !probe.is_dir(path) {
                style = RowStyle::Invalid;
            }
            if counts.get(path).copied().unwrap_or(0) > 1 {
                style = RowStyle::Duplicate;
            }
            if index == cursor {
                style = RowStyle::Selected;
            }
            Row { index, path, style }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OnlyBin;

    impl DirProbe for OnlyBin {
        fn is_dir(&self, path: &str) -> bool {
            path == "/bin" || path == "/usr/bin"
        }
    }

    fn styles(rows: &[Row]) -> Vec<RowStyle> {
        rows.iter().map(|r| r.style).collect()
    }

    #[test]
    fn test_selection_overrides_duplicate_and_invalid() {
        let paths: PathList = vec!["/bin", "/bin", "/nonexistent"].into_iter().collect();
        let rows = build_rows(&paths, 2, &OnlyBin);
        assert_eq!(
            styles(&rows),
            vec![RowStyle::Duplicate, RowStyle::Duplicate, RowStyle::Selected]
        );
    }

    #[test]
    fn test_duplicate_overrides_invalid() {
        let paths: PathList = vec!["/usr/bin", "/gone", "/gone"].into_iter().collect();
        let rows = build_rows(&paths, 0, &OnlyBin);
        assert_eq!(
            styles(&rows),
            vec![RowStyle::Selected, RowStyle::Duplicate, RowStyle::Duplicate]
        );
    }

    #[test]
    fn test_invalid_and_normal() {
        let paths: PathList = vec!["/usr/bin", "/bin", "/gone"].into_iter().collect();
        let rows = build_rows(&paths, 0, &OnlyBin);
        assert_eq!(
            styles(&rows),
            vec![RowStyle::Selected, RowStyle::Normal, RowStyle::Invalid]
        );
    }

    #[test]
    fn test_row_text() {
        let paths: PathList = vec!["/usr/bin", "/bin"].into_iter().collect();
        let rows = build_rows(&paths, 1, &OnlyBin);
        assert_eq!(rows[0].text(), "  1. /usr/bin");
        assert_eq!(rows[1].text(), "> 2. /bin");
    }

    #[test]
    fn test_empty_list_has_no_rows() {
        assert!(build_rows(&PathList::default(), 0, &OnlyBin).is_empty());
    }
}
