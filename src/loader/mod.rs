//! Dataset ingestion.
//!
//! Loads the three-table CSV layout (`people.csv`: id,name,birth;
//! `movies.csv`: id,title,year; `stars.csv`: person_id,movie_id) into an
//! `EntityStore`. The people and movies tables parse in parallel; the stars
//! table is applied afterwards, establishing the credit/cast membership
//! relation. Star rows that reference an unknown person or movie are
//! dropped silently rather than failing the load.
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use crate::errors::LoadError;
use crate::store::{EntityStore, Movie, MovieId, Person, PersonId};

#[derive(Debug, Deserialize)]
struct PersonRow {
    id: String,
    name: String,
    birth: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MovieRow {
    id: String,
    title: String,
    year: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StarRow {
    person_id: String,
    movie_id: String,
}

/// Load a dataset directory into a fresh `EntityStore`.
///
/// # Errors
/// Returns `LoadError` when a table file is missing, unreadable, or its CSV
/// structure is invalid. Unparseable birth/year fields and dangling star
/// rows are tolerated, never errors.
pub fn load_directory(dir: &Path) -> Result<EntityStore, LoadError> {
    let (people, movies) = rayon::join(
        || read_people(&dir.join("people.csv")),
        || read_movies(&dir.join("movies.csv")),
    );

    let mut store = EntityStore::new();
    for person in people? {
        store.insert_person(person);
    }
    for movie in movies? {
        store.insert_movie(movie);
    }

    for row in read_rows::<StarRow>(&dir.join("stars.csv"))? {
        store.link(&PersonId(row.person_id), &MovieId(row.movie_id));
    }
    Ok(store)
}

fn read_people(path: &Path) -> Result<Vec<Person>, LoadError> {
    Ok(read_rows::<PersonRow>(path)?
        .into_iter()
        .map(|row| Person {
            id: PersonId(row.id),
            name: row.name,
            birth: parse_year(row.birth.as_deref()),
            credits: HashSet::new(),
        })
        .collect())
}

fn read_movies(path: &Path) -> Result<Vec<Movie>, LoadError> {
    Ok(read_rows::<MovieRow>(path)?
        .into_iter()
        .map(|row| Movie {
            id: MovieId(row.id),
            title: row.title,
            year: parse_year(row.year.as_deref()),
            cast: HashSet::new(),
        })
        .collect())
}

fn read_rows<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Vec<T>, LoadError> {
    if !path.exists() {
        return Err(LoadError::MissingFile { file: path.to_path_buf() });
    }
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let mut out = Vec::new();
    for row in reader.deserialize() {
        out.push(row.map_err(|source| LoadError::Csv { file: path.to_path_buf(), source })?);
    }
    Ok(out)
}

// Year fields in the wild hold integers, blanks, or junk; junk reads as absent.
fn parse_year(raw: Option<&str>) -> Option<u16> {
    raw.and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_dataset(dir: &Path, people: &str, movies: &str, stars: &str) {
        fs::write(dir.join("people.csv"), people).unwrap();
        fs::write(dir.join("movies.csv"), movies).unwrap();
        fs::write(dir.join("stars.csv"), stars).unwrap();
    }

    #[test]
    fn loads_tables_and_links_membership() {
        let td = tempdir().unwrap();
        write_dataset(
            td.path(),
            "id,name,birth\n1,Kevin Bacon,1958\n2,Tom Hanks,1956\n",
            "id,title,year\n10,Apollo 13,1995\n",
            "person_id,movie_id\n1,10\n2,10\n",
        );

        let store = load_directory(td.path()).unwrap();
        assert_eq!(store.person_count(), 2);
        assert_eq!(store.movie_count(), 1);

        let bacon = store.person(&PersonId("1".into())).unwrap();
        assert_eq!(bacon.birth, Some(1958));
        assert!(bacon.credits.contains(&MovieId("10".into())));
        let apollo = store.movie(&MovieId("10".into())).unwrap();
        assert_eq!(apollo.year, Some(1995));
        assert_eq!(apollo.cast.len(), 2);
    }

    #[test]
    fn quoted_titles_and_blank_years_survive() {
        let td = tempdir().unwrap();
        write_dataset(
            td.path(),
            "id,name,birth\n1,Cher,\n",
            "id,title,year\n10,\"Good Morning, Vietnam\",n/a\n",
            "person_id,movie_id\n1,10\n",
        );

        let store = load_directory(td.path()).unwrap();
        assert_eq!(store.person(&PersonId("1".into())).unwrap().birth, None);
        let movie = store.movie(&MovieId("10".into())).unwrap();
        assert_eq!(movie.title, "Good Morning, Vietnam");
        assert_eq!(movie.year, None);
    }

    #[test]
    fn dangling_star_rows_are_dropped() {
        let td = tempdir().unwrap();
        write_dataset(
            td.path(),
            "id,name,birth\n1,Kevin Bacon,1958\n",
            "id,title,year\n10,Footloose,1984\n",
            "person_id,movie_id\n1,10\n99,10\n1,99\n",
        );

        let store = load_directory(td.path()).unwrap();
        let movie = store.movie(&MovieId("10".into())).unwrap();
        assert_eq!(movie.cast.len(), 1);
        let person = store.person(&PersonId("1".into())).unwrap();
        assert_eq!(person.credits.len(), 1);
    }

    #[test]
    fn missing_table_is_a_load_error() {
        let td = tempdir().unwrap();
        fs::write(td.path().join("people.csv"), "id,name,birth\n").unwrap();
        // movies.csv and stars.csv absent

        let err = load_directory(td.path());
        assert!(matches!(err, Err(LoadError::MissingFile { .. })));
    }
}
