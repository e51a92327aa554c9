use crate::catalog::Course;
use crate::error::CatalogError;
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

/// Read course records from the comma-delimited file at `path`.
///
/// One record per line: `identifier,title[,prerequisite]*`. There is no
/// header line, no escaping and no quoting; quote characters are treated as
/// ordinary bytes and a comma always splits fields. Rows with fewer than two
/// fields become degenerate records (empty title, no prerequisites) rather
/// than being rejected. Empty prerequisite fields, such as the one produced
/// by a trailing comma, are dropped. Blank lines are skipped.
///
/// On success the records are returned sorted ascending by identifier; the
/// sort is stable, so duplicate identifiers keep their file order. Failure
/// to open the file yields [`CatalogError::Io`] and the caller's catalog is
/// left untouched.
pub fn load_catalog(path: &Path) -> Result<Vec<Course>, CatalogError> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(file);

    let mut courses = Vec::new();
    for record in reader.byte_records() {
        let record = record?;
        if record.len() == 1 && record.get(0).is_some_and(|f| f.is_empty()) {
            continue;
        }
        let mut fields = record
            .iter()
            .map(|f| String::from_utf8_lossy(f).into_owned());
        let Some(identifier) = fields.next() else {
            continue;
        };
        let title = fields.next().unwrap_or_default();
        let prerequisites: Vec<String> = fields.filter(|f| !f.is_empty()).collect();
        courses.push(Course {
            identifier,
            title,
            prerequisites,
        });
    }

    courses.sort_by(|a, b| a.identifier.cmp(&b.identifier));
    tracing::debug!(
        "loaded {} course record(s) from {}",
        courses.len(),
        path.display()
    );
    Ok(courses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_data_file(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("courses.txt");
        fs::write(&path, content).expect("write course data");
        path
    }

    #[test]
    fn test_load_sorts_by_identifier() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_data_file(
            &dir,
            "CS201,Data Structures,CS101\nMATH201,Calculus\nCS101,Intro to CS\n",
        );

        let courses = load_catalog(&path).unwrap();
        let identifiers: Vec<&str> = courses.iter().map(|c| c.identifier.as_str()).collect();
        assert_eq!(identifiers, vec!["CS101", "CS201", "MATH201"]);
    }

    #[test]
    fn test_load_parses_prerequisites_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_data_file(&dir, "CS301,Algorithms,CS201,MATH201\n");

        let courses = load_catalog(&path).unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].title, "Algorithms");
        assert_eq!(
            courses[0].prerequisites,
            vec!["CS201".to_string(), "MATH201".to_string()]
        );
    }

    #[test]
    fn test_trailing_comma_yields_no_empty_prerequisite() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_data_file(&dir, "CS101,Intro to CS,\n");

        let courses = load_catalog(&path).unwrap();
        assert_eq!(courses.len(), 1);
        assert!(courses[0].prerequisites.is_empty());
    }

    #[test]
    fn test_degenerate_single_field_row_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_data_file(&dir, "CS101\nCS201,Data Structures,CS101\n");

        let courses = load_catalog(&path).unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].identifier, "CS101");
        assert_eq!(courses[0].title, "");
        assert!(courses[0].prerequisites.is_empty());
    }

    #[test]
    fn test_blank_lines_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_data_file(&dir, "\nCS101,Intro to CS\n\n\nCS201,Data Structures,CS101\n\n");

        let courses = load_catalog(&path).unwrap();
        assert_eq!(courses.len(), 2);
    }

    #[test]
    fn test_duplicate_identifiers_keep_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_data_file(&dir, "CS101,First occurrence\nCS100,Before\nCS101,Second occurrence\n");

        let courses = load_catalog(&path).unwrap();
        assert_eq!(courses[0].identifier, "CS100");
        assert_eq!(courses[1].title, "First occurrence");
        assert_eq!(courses[2].title, "Second occurrence");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does_not_exist.txt");

        let err = load_catalog(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn test_empty_file_yields_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_data_file(&dir, "");

        let courses = load_catalog(&path).unwrap();
        assert!(courses.is_empty());
    }
}
