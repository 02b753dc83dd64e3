//! Interactive read-eval loop.

use crate::command::Command;
use crate::error::ConsoleResult;
use crate::session_manager::SessionManager;
use crate::submission::submit_record;
use crate::upload::upload_file;

use intake_client::BackendClient;
use intake_config::Config;
use intake_core::Identity;

use log::warn;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// The bundled documentation, shown by the `docs` command
const DOCS: &str = include_str!("../../README.md");

pub struct Console {
    client: BackendClient,
    manager: SessionManager,
    table: String,
    bucket: String,
}

impl Console {
    pub fn new(config: &Config, client: BackendClient) -> Self {
        Self {
            client,
            manager: SessionManager::new(),
            table: config.backend.table.clone(),
            bucket: config.backend.bucket.clone(),
        }
    }

    /// Run the read-eval loop until `quit` or EOF
    pub async fn run(&mut self) -> ConsoleResult<()> {
        let mut editor = DefaultEditor::new()?;

        println!("intake - type 'help' for commands");

        loop {
            match editor.readline("intake> ") {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    let _ = editor.add_history_entry(trimmed);

                    match Command::parse(trimmed) {
                        Ok(Command::Quit) => break,
                        Ok(command) => self.dispatch(command, &mut editor).await,
                        Err(e) => println!("{e}"),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C (type 'quit' to exit)");
                }
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            }
        }

        Ok(())
    }

    async fn dispatch(&mut self, command: Command, editor: &mut DefaultEditor) {
        match command {
            Command::Login { email, password } => {
                let Some(password) = resolve_password(password, editor) else {
                    return;
                };

                match self.manager.login(&self.client, &email, &password).await {
                    Ok(identity) => {
                        println!("🎉 Login successful!");
                        show_identity(&identity);
                    }
                    Err(e) => {
                        warn!("login failed: {e}");
                        println!("Login failed. Please check your credentials.");
                    }
                }
            }

            Command::Signup { email, password } => {
                let Some(password) = resolve_password(password, editor) else {
                    return;
                };

                match self.manager.signup(&self.client, &email, &password).await {
                    Ok(identity) => {
                        println!(
                            "🎉 Signup successful! Log in as {} to continue.",
                            identity.email
                        );
                    }
                    Err(e) => {
                        warn!("signup failed: {e}");
                        println!("Signup failed. Please try again.");
                    }
                }
            }

            Command::Submit => match submit_record(&self.client, &self.table).await {
                Ok(record) => println!("🚀 Record added successfully! (id {})", record.id),
                Err(e) => {
                    warn!("record submission failed: {e}");
                    println!("❌ Error adding record to the database");
                }
            },

            Command::Upload { path } => {
                let bytes = match std::fs::read(&path) {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        println!("Cannot read {}: {e}", path.display());
                        return;
                    }
                };

                // Object name is the file's base name, like the original form
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "upload".to_string());

                match upload_file(&self.client, &self.bucket, &name, &bytes).await {
                    Ok(()) => println!("🚀 File uploaded successfully!"),
                    Err(e) => {
                        warn!("upload failed: {e}");
                        println!("❌ Upload failed");
                    }
                }
            }

            Command::Whoami => match self.manager.session().identity() {
                Some(identity) => show_identity(identity),
                None => println!("Not logged in"),
            },

            Command::Status => {
                println!("backend: {}", self.client.base_url);
                println!("table: {} / bucket: {}", self.table, self.bucket);
                match self.manager.session().identity() {
                    Some(identity) => println!("session: authenticated as {}", identity.email),
                    None => println!("session: anonymous"),
                }
            }

            Command::Docs => println!("{DOCS}"),

            Command::Help => println!("{}", Command::help_text()),

            // Handled by the caller before dispatch
            Command::Quit => {}
        }
    }
}

/// Identity summary, shown after login and by `whoami`
fn show_identity(identity: &Identity) {
    println!("🎉 Logged in as: {}", identity.email);
    if let Some(name) = identity.display_name() {
        println!("Username: {name}");
    }
}

/// Use the given password or prompt for one
fn resolve_password(password: Option<String>, editor: &mut DefaultEditor) -> Option<String> {
    match password {
        Some(password) => Some(password),
        None => editor.readline("password: ").ok(),
    }
}
