use std::fmt;

use prettytable::Table;

use data::{BookRecord, Library};
use errors::*;

const MIN_YEAR: i32 = 1000;
const MAX_YEAR: i32 = 9999;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Command {
    Add(BookRecord),
    Search(String),
    List,
    Remove(String),
    Toggle(String),
    Stats,
    Nil,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Command::Add(ref book) => write!(f, "Add '{}' by '{}'", book.title, book.author),
            Command::Search(ref query) => write!(f, "Search with query '{}'", query),
            Command::List => write!(f, "List books"),
            Command::Remove(ref title) => write!(f, "Remove every copy of '{}'", title),
            Command::Toggle(ref title) => write!(f, "Toggle read status of '{}'", title),
            Command::Stats => write!(f, "Show library statistics"),
            Command::Nil => write!(f, "Nil command for implementation reasons"),
        }
    }
}

pub fn exec_command(lib: &mut Library, command: Command) -> Result<String> {
    match command {
        Command::Add(book) => do_add(lib, book),
        Command::List => do_list(lib),
        Command::Search(ref query) => do_search(lib, query),
        Command::Remove(ref title) => do_remove(lib, title),
        Command::Toggle(ref title) => do_toggle(lib, title),
        Command::Stats => do_stats(lib),
        Command::Nil => Ok(String::new()),
    }
}

fn do_add(lib: &mut Library, book: BookRecord) -> Result<String> {
    // The store itself takes anything; the year range is checked here.
    if book.year < MIN_YEAR || book.year > MAX_YEAR {
        return Err(ErrorKind::BadYear(book.year).into());
    }

    let msg = format!("Successfully added {} by {}", book.title, book.author);

    lib.add(book)?;

    Ok(msg)
}

fn do_list(lib: &Library) -> Result<String> {
    print_books(lib.books());

    Ok("End of List".into())
}

fn do_search(lib: &Library, query: &str) -> Result<String> {
    let n = print_books(lib.search(query));

    Ok(format!("Found {} result(s)", n))
}

fn do_remove(lib: &mut Library, title: &str) -> Result<String> {
    if lib.remove(title)? {
        Ok(format!("Removed every copy of '{}'", title))
    } else {
        Err(ErrorKind::NoSuchTitle(title.into()).into())
    }
}

fn do_toggle(lib: &mut Library, title: &str) -> Result<String> {
    match lib.toggle_read(title)? {
        Some(book) => {
            let status = if book.read { "read" } else { "unread" };

            Ok(format!("'{}' marked as {}", book.title, status))
        }
        None => Err(ErrorKind::NoSuchTitle(title.into()).into()),
    }
}

fn do_stats(lib: &Library) -> Result<String> {
    let (total, read, percentage) = lib.stats();

    let mut table = Table::new();
    table.add_row(row!["TOTAL", "READ", "% READ"]);
    table.add_row(row![&total.to_string(),
                       &read.to_string(),
                       &format!("{:.1}", percentage)]);

    table.printstd();

    Ok(format!("You have read {} of {} book(s)", read, total))
}

fn print_books<'a, I>(books: I) -> u32
    where I: IntoIterator<Item = &'a BookRecord>
{
    let mut table = Table::new();
    table.add_row(row!["TITLE", "AUTHOR", "YEAR", "GENRE", "READ"]);

    let mut n = 0;

    for book in books {
        n += 1;

        table.add_row(row![&book.title,
                           &book.author,
                           &book.year.to_string(),
                           &book.genre,
                           if book.read { "yes" } else { "no" }]);
    }

    table.printstd();

    n
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use data::{BookRecord, Library};
    use errors::ErrorKind;
    use super::{exec_command, Command};

    fn book(title: &str, year: i32) -> BookRecord {
        BookRecord {
            title: title.into(),
            author: "Frank Herbert".into(),
            year: year,
            genre: "Sci-Fi".into(),
            read: false,
        }
    }

    fn temp_library() -> (TempDir, Library) {
        let dir = TempDir::new().expect("temp dir");
        let lib = Library::open(dir.path().join("library.json"),
                                dir.path().join("library_backup.json"));

        (dir, lib)
    }

    #[test]
    fn add_reports_title_and_author() {
        let (_dir, mut lib) = temp_library();

        let msg = exec_command(&mut lib, Command::Add(book("Dune", 1965))).unwrap();

        assert_eq!(msg, "Successfully added Dune by Frank Herbert");
        assert_eq!(lib.books().len(), 1);
    }

    #[test]
    fn add_rejects_years_outside_range() {
        let (_dir, mut lib) = temp_library();

        let err = exec_command(&mut lib, Command::Add(book("Dune", 999))).unwrap_err();

        match *err.kind() {
            ErrorKind::BadYear(year) => assert_eq!(year, 999),
            ref other => panic!("unexpected error: {}", other),
        }

        assert!(lib.books().is_empty());
    }

    #[test]
    fn remove_of_unknown_title_is_an_error() {
        let (_dir, mut lib) = temp_library();

        let err = exec_command(&mut lib, Command::Remove("Dune".into())).unwrap_err();

        match *err.kind() {
            ErrorKind::NoSuchTitle(ref title) => assert_eq!(title, "Dune"),
            ref other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn toggle_names_the_new_status() {
        let (_dir, mut lib) = temp_library();
        exec_command(&mut lib, Command::Add(book("Dune", 1965))).unwrap();

        let msg = exec_command(&mut lib, Command::Toggle("dune".into())).unwrap();

        assert_eq!(msg, "'Dune' marked as read");
    }

    #[test]
    fn toggle_of_unknown_title_is_an_error() {
        let (_dir, mut lib) = temp_library();

        assert!(exec_command(&mut lib, Command::Toggle("Dune".into())).is_err());
    }

    #[test]
    fn remove_reports_the_title() {
        let (_dir, mut lib) = temp_library();
        exec_command(&mut lib, Command::Add(book("Dune", 1965))).unwrap();
        exec_command(&mut lib, Command::Add(book("Dune", 1965))).unwrap();

        let msg = exec_command(&mut lib, Command::Remove("DUNE".into())).unwrap();

        assert_eq!(msg, "Removed every copy of 'DUNE'");
        assert!(lib.books().is_empty());
    }

    #[test]
    fn nil_produces_no_output() {
        let (_dir, mut lib) = temp_library();

        assert_eq!(exec_command(&mut lib, Command::Nil).unwrap(), "");
    }
}
