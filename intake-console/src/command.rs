use crate::error::ConsoleError;

use std::path::PathBuf;

/// One line of console input, parsed
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Login {
        email: String,
        password: Option<String>,
    },
    Signup {
        email: String,
        password: Option<String>,
    },
    Submit,
    Upload {
        path: PathBuf,
    },
    Whoami,
    Status,
    Docs,
    Help,
    Quit,
}

impl Command {
    /// Parse one console line.
    pub fn parse(line: &str) -> Result<Command, ConsoleError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "login" | "signup" => {
                let mut parts = rest.split_whitespace();
                let email = parts
                    .next()
                    .ok_or_else(|| ConsoleError::usage(format!("usage: {word} <email> [password]")))?
                    .to_string();
                let password = parts.next().map(String::from);
                if parts.next().is_some() {
                    return Err(ConsoleError::usage(format!(
                        "usage: {word} <email> [password]"
                    )));
                }

                if word == "login" {
                    Ok(Command::Login { email, password })
                } else {
                    Ok(Command::Signup { email, password })
                }
            }

            "submit" | "whoami" | "status" | "docs" | "readme" | "help" | "?" | "quit"
            | "exit"
                if !rest.is_empty() =>
            {
                Err(ConsoleError::usage(format!("{word} takes no arguments")))
            }

            "submit" => Ok(Command::Submit),

            // The remainder of the line is the path; paths may contain spaces
            "upload" => {
                if rest.is_empty() {
                    return Err(ConsoleError::usage("usage: upload <path>"));
                }
                Ok(Command::Upload {
                    path: PathBuf::from(rest),
                })
            }

            "whoami" => Ok(Command::Whoami),
            "status" => Ok(Command::Status),
            "docs" | "readme" => Ok(Command::Docs),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),

            other => Err(ConsoleError::usage(format!(
                "unknown command {other:?} (type 'help')"
            ))),
        }
    }

    pub fn help_text() -> &'static str {
        "Commands:\n\
         \x20 login <email> [password]    authenticate and start the session\n\
         \x20 signup <email> [password]   register a new user (log in afterwards)\n\
         \x20 submit                      insert one timestamped record\n\
         \x20 upload <path>               send a file to the blob store\n\
         \x20 whoami                      show the current identity\n\
         \x20 status                      show connection and session state\n\
         \x20 docs                        show the bundled documentation\n\
         \x20 help                        show this help\n\
         \x20 quit                        exit"
    }
}
