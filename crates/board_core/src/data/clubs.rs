//! Club dataset CSV loading

use std::path::Path;

use super::DataError;
use crate::models::ClubRecord;

/// Read the club dataset, dropping rows that lack a name, short name or
/// three-letter abbreviation.
pub fn read_clubs(path: &Path) -> Result<Vec<ClubRecord>, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut clubs = Vec::new();
    let mut skipped = 0usize;
    for (row, result) in reader.deserialize::<ClubRecord>().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                skipped += 1;
                log::warn!("skipping club row {}: {}", row + 2, err);
                continue;
            }
        };
        if record.name.is_empty() || record.short_name.is_empty() || record.tla.is_empty() {
            skipped += 1;
            continue;
        }
        clubs.push(record);
    }

    log::info!(
        "loaded {} clubs from {} ({} skipped)",
        clubs.len(),
        path.display(),
        skipped
    );
    Ok(clubs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "id,name,shortName,tla,crest,address,website,founded,clubColors,venue\n";

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn full_rows_parse_with_every_field() {
        let csv = format!(
            "{HEADER}57,Arsenal FC,Arsenal,ARS,https://crests.example/57.png,\"75 Drayton Park, London\",http://www.arsenal.com,1886,Red / White,Emirates Stadium\n"
        );
        let clubs = read_clubs(write_csv(&csv).path()).unwrap();
        assert_eq!(clubs.len(), 1);
        let club = &clubs[0];
        assert_eq!(club.id, "57");
        assert_eq!(club.short_name, "Arsenal");
        assert_eq!(club.tla, "ARS");
        assert_eq!(club.founded, "1886");
        assert_eq!(club.address, "75 Drayton Park, London");
        assert_eq!(club.venue, "Emirates Stadium");
    }

    #[test]
    fn incomplete_rows_are_dropped() {
        let csv = format!(
            "{HEADER}57,Arsenal FC,Arsenal,ARS,,,,,,\n\
             58,,Villa,AVL,,,,,,\n\
             61,Chelsea FC,,CHE,,,,,,\n\
             62,Everton FC,Everton,,,,,,,\n"
        );
        let clubs = read_clubs(write_csv(&csv).path()).unwrap();
        assert_eq!(clubs.len(), 1);
        assert_eq!(clubs[0].name, "Arsenal FC");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let csv = format!("{HEADER}64, Liverpool FC , Liverpool , LIV ,,,,,,Anfield\n");
        let clubs = read_clubs(write_csv(&csv).path()).unwrap();
        assert_eq!(clubs[0].name, "Liverpool FC");
        assert_eq!(clubs[0].tla, "LIV");
    }

    #[test]
    fn missing_file_reports_an_io_error() {
        let result = read_clubs(Path::new("/nonexistent/clubs.csv"));
        assert!(result.is_err());
    }
}
