use std::io;
use std::num::ParseIntError;
use serde_json;
use xdg;

error_chain! {
    foreign_links {
        Io(io::Error);
        Json(serde_json::Error);
        ParseInt(ParseIntError);
        Xdg(xdg::BaseDirectoriesError);
    }

    errors {
        NoSuchTitle(title: String) {
            description("No book with that title")
            display("No book titled `{}`", title)
        }
        MissingArg(arg: &'static str) {
            description("Missing argument")
            display("Required argument `{}` is missing", arg)
        }
        BadYear(year: i32) {
            description("Years must be four-digit integers")
            display("Year `{}` is not between 1000 and 9999", year)
        }
    }
}
