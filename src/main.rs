#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate prettytable;
#[macro_use]
extern crate serde_derive;

extern crate clap;
extern crate cmdline_parser;
extern crate linefeed;
extern crate serde;
extern crate serde_json;
extern crate xdg;

#[cfg(test)]
extern crate tempfile;

mod commands;
mod data;
mod errors;
mod shell;

use std::path::PathBuf;

use clap::{App, Arg, SubCommand};

use xdg::BaseDirectories;

use commands::{exec_command, Command};
use data::{BookRecord, Library};
use errors::*;

const NAME: &'static str = "shelf";
const LIBNAME: &'static str = "library.json";
const BACKUPNAME: &'static str = "library_backup.json";

fn get_base() -> Result<BaseDirectories> {
    let bd = BaseDirectories::with_prefix(NAME)?;

    Ok(bd)
}

fn data_file(bd: &BaseDirectories, name: &str) -> Result<PathBuf> {
    let path = match bd.find_data_file(name) {
        Some(path) => path,
        None => bd.place_data_file(name)?,
    };

    Ok(path)
}

fn init() -> Library {
    let bd = get_base().expect("Couldn't get base dirs");

    let lib_path = data_file(&bd, LIBNAME).expect("Couldn't place library file");
    let backup_path = data_file(&bd, BACKUPNAME).expect("Couldn't place backup file");

    Library::open(lib_path, backup_path)
}

fn main() {
    let mut lib = init();

    let app = App::new(NAME)
        .author("Rameen Rashid")
        .about("personal library catalog")
        .version("0.1")
        .subcommand(SubCommand::with_name("add")
                        .about("add a book")
                        .arg(Arg::with_name("TITLE")
                                 .required(true)
                                 .index(1)
                                 .help("title of book"))
                        .arg(Arg::with_name("AUTHOR")
                                 .required(true)
                                 .index(2)
                                 .help("Author of book"))
                        .arg(Arg::with_name("YEAR")
                                 .required(true)
                                 .index(3)
                                 .help("Year of publication (4-digit)"))
                        .arg(Arg::with_name("GENRE")
                                 .required(true)
                                 .index(4)
                                 .help("Genre of book"))
                        .arg(Arg::with_name("read")
                                 .long("read")
                                 .help("Mark the book as already read")))
        .subcommand(SubCommand::with_name("list").about("list every book in the catalog"))
        .subcommand(SubCommand::with_name("search")
                    .about("find books. case insensitive match on 'TITLE' and 'AUTHOR'")
                    .arg(Arg::with_name("QUERY")
                         .required(true)
                         .index(1)
                         .help("search query")))
        .subcommand(SubCommand::with_name("remove")
                    .about("Remove every copy of a book")
                    .arg(Arg::with_name("TITLE")
                         .required(true)
                         .index(1)
                         .help("Title of book to remove (all copies, case insensitive)")))
        .subcommand(SubCommand::with_name("toggle")
                    .about("Flip a book between read and unread")
                    .arg(Arg::with_name("TITLE")
                         .required(true)
                         .index(1)
                         .help("Title of book to toggle (first match, case insensitive)")))
        .subcommand(SubCommand::with_name("stats").about("Show statistics for the catalog"))
        .subcommand(SubCommand::with_name("shell").about("Start an interactive session"));

    let matches = app.get_matches();

    if matches.subcommand_matches("shell").is_some() {
        shell::run(&mut lib).expect("Interactive session failed");
        return;
    }

    let mut command = Command::Nil;
    if let Some(add) = matches.subcommand_matches("add") {
        let book = BookRecord {
            title: add.value_of("TITLE").unwrap().into(),
            author: add.value_of("AUTHOR").unwrap().into(),
            year: add.value_of("YEAR")
                .unwrap()
                .parse()
                .expect("Invalid number for year"),
            genre: add.value_of("GENRE").unwrap().into(),
            read: add.is_present("read"),
        };

        command = Command::Add(book);
    }

    if let Some(_) = matches.subcommand_matches("list") {
        command = Command::List;
    }

    if let Some(search) = matches.subcommand_matches("search") {
        let query = search.value_of("QUERY").unwrap().into();

        command = Command::Search(query);
    }

    if let Some(remove) = matches.subcommand_matches("remove") {
        let title = remove.value_of("TITLE").unwrap().into();

        command = Command::Remove(title);
    }

    if let Some(toggle) = matches.subcommand_matches("toggle") {
        let title = toggle.value_of("TITLE").unwrap().into();

        command = Command::Toggle(title);
    }

    if let Some(_) = matches.subcommand_matches("stats") {
        command = Command::Stats;
    }

    let msg = exec_command(&mut lib, command).unwrap();

    println!("{}", msg);
}
