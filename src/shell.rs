use cmdline_parser::Parser;
use linefeed::{ReadResult, Reader};

use commands::{exec_command, Command};
use data::{BookRecord, Library};
use errors::*;

const PROMPT: &'static str = "shelf> ";

const USAGE: &'static str = "Commands:
    add TITLE AUTHOR YEAR GENRE [read]    add a book
    list                                  list every book
    search QUERY                          find books by title or author
    remove TITLE                          remove every copy of a book
    toggle TITLE                          flip a book between read and unread
    stats                                 show library statistics
    help                                  show this message
    quit                                  leave the session";

/// Run an interactive session over `lib`. Returns when the user quits or
/// input ends.
pub fn run(lib: &mut Library) -> Result<()> {
    let mut reader = Reader::new("shelf")?;
    reader.set_prompt(PROMPT);

    while let ReadResult::Input(line) = reader.read_line()? {
        if !line.trim().is_empty() {
            reader.add_history(line.clone());
        }

        let words: Vec<String> = Parser::new(&line).map(|(_, word)| word).collect();

        match parse_line(&words) {
            Ok(Some(command)) => {
                match exec_command(lib, command) {
                    Ok(msg) => println!("{}", msg),
                    Err(e) => println!("{}", e),
                }
            }
            Ok(None) => break,
            Err(e) => println!("{}", e),
        }
    }

    Ok(())
}

/// Parse one tokenized line. `Ok(None)` means the session should end.
fn parse_line(words: &[String]) -> Result<Option<Command>> {
    let keyword = match words.first() {
        Some(word) => word.as_str(),
        None => return Ok(Some(Command::Nil)),
    };

    let arg = |idx: usize, name: &'static str| -> Result<String> {
        words
            .get(idx)
            .cloned()
            .ok_or_else(|| ErrorKind::MissingArg(name).into())
    };

    let command = match keyword {
        "add" => {
            let title = arg(1, "TITLE")?;
            let author = arg(2, "AUTHOR")?;
            let year = arg(3, "YEAR")?.parse()?;
            let genre = arg(4, "GENRE")?;
            let read = words.get(5).map_or(false, |word| word == "read");

            Command::Add(BookRecord {
                             title: title,
                             author: author,
                             year: year,
                             genre: genre,
                             read: read,
                         })
        }
        "list" => Command::List,
        "search" => Command::Search(arg(1, "QUERY")?),
        "remove" => Command::Remove(arg(1, "TITLE")?),
        "toggle" => Command::Toggle(arg(1, "TITLE")?),
        "stats" => Command::Stats,
        "help" => {
            println!("{}", USAGE);

            Command::Nil
        }
        "quit" | "exit" => return Ok(None),
        other => bail!("Unknown command `{}`, try `help`", other),
    };

    Ok(Some(command))
}
