//! Shell commands for the namespace service
//!
//! This module implements the line-oriented command set. Argument counts are
//! validated before touching the service; service errors are rendered through
//! their `Display` form.

use services_namespace::{NamespaceOperations, NamespaceService};

const HELP_TEXT: &str = "Command list:
    help - display this message
    cd [path] - change current working directory
    ls - list current directory files
    tree - print tree of current working directory

    move [source] [destination] - move file or folder from source to destination
    del [path] - delete file or folder
    read [path] - read binary file or logfile

    makedir [name] - make a directory
    makebin [name] [information] - make a binary file

    makelog [name] [information] - make a log file
    addlog [path_to_logfile] [information] - add information to a log file

    makebuf [name] - make a buffer file
    pushbuf [path_to_buffile] [information] - push information to a buffer file
    popbuf [path_to_buffile] - pop information from a buffer file";

/// Shell command handler
///
/// Owns the namespace service and dispatches one command line at a time.
/// Commands that only mutate state return an empty string; query commands
/// return the text to print.
#[derive(Debug)]
pub struct CommandHandler {
    service: NamespaceService,
}

impl CommandHandler {
    /// Creates a handler over a fresh namespace
    pub fn new() -> Self {
        Self {
            service: NamespaceService::new(),
        }
    }

    /// Creates a handler over an existing service
    pub fn with_service(service: NamespaceService) -> Self {
        Self { service }
    }

    /// Releases the underlying service
    pub fn into_service(self) -> NamespaceService {
        self.service
    }

    /// Borrows the underlying service
    pub fn service(&self) -> &NamespaceService {
        &self.service
    }

    /// The shell prompt for the current working directory, e.g. `~/Dir_1`
    pub fn prompt(&self) -> String {
        self.service.cwd_path()
    }

    /// Parses and executes a single command line
    ///
    /// Returns the text to display on success, or an error message. Blank
    /// lines are accepted and produce no output.
    pub fn execute(&mut self, line: &str) -> Result<String, String> {
        let args: Vec<&str> = line.split_whitespace().collect();
        let Some(&verb) = args.first() else {
            return Ok(String::new());
        };

        match verb {
            "help" => Ok(HELP_TEXT.to_string()),

            "cd" => {
                if args.len() != 2 {
                    return Err("Wrong command pattern: cd [path]".to_string());
                }
                self.service
                    .change_working_directory(args[1])
                    .map_err(|e| format!("{}", e))?;
                Ok(String::new())
            }

            "ls" => {
                let names = self.service.list_cwd().map_err(|e| format!("{}", e))?;
                Ok(names.join("\n"))
            }

            "tree" => self.service.render_tree().map_err(|e| format!("{}", e)),

            "move" => {
                if args.len() != 3 {
                    return Err(
                        "Wrong command pattern: move [source] [destination]".to_string()
                    );
                }
                self.service
                    .move_node(args[1], args[2])
                    .map_err(|e| format!("{}", e))?;
                Ok(String::new())
            }

            "del" => {
                if args.len() != 2 {
                    return Err("Wrong command pattern: del [path]".to_string());
                }
                self.service.delete(args[1]).map_err(|e| format!("{}", e))?;
                Ok(String::new())
            }

            "read" => {
                if args.len() != 2 {
                    return Err("Wrong command pattern: read [path]".to_string());
                }
                self.service.read(args[1]).map_err(|e| format!("{}", e))
            }

            "makedir" => {
                if args.len() != 2 {
                    return Err("Wrong command pattern: makedir [name]".to_string());
                }
                self.service
                    .create_directory(".", args[1])
                    .map_err(|e| format!("{}", e))?;
                Ok(String::new())
            }

            "makebin" => {
                if args.len() < 3 {
                    return Err(
                        "Wrong command pattern: makebin [name] [information]".to_string()
                    );
                }
                self.service
                    .create_binary_file(".", args[1], &args[2..].join(" "))
                    .map_err(|e| format!("{}", e))?;
                Ok(String::new())
            }

            "makelog" => {
                if args.len() < 2 {
                    return Err(
                        "Wrong command pattern: makelog [name] [information]".to_string()
                    );
                }
                self.service
                    .create_log_file(".", args[1], &args[2..].join(" "))
                    .map_err(|e| format!("{}", e))?;
                Ok(String::new())
            }

            "addlog" => {
                if args.len() < 3 {
                    return Err(
                        "Wrong command pattern: addlog [path_to_logfile] [information]"
                            .to_string(),
                    );
                }
                self.service
                    .append_log(args[1], &args[2..].join(" "))
                    .map_err(|e| format!("{}", e))?;
                Ok(String::new())
            }

            "makebuf" => {
                if args.len() != 2 {
                    return Err("Wrong command pattern: makebuf [name]".to_string());
                }
                self.service
                    .create_buffer(".", args[1])
                    .map_err(|e| format!("{}", e))?;
                Ok(String::new())
            }

            "pushbuf" => {
                if args.len() < 3 {
                    return Err(
                        "Wrong command pattern: pushbuf [path_to_buffile] [information]"
                            .to_string(),
                    );
                }
                self.service
                    .push_buffer(args[1], &args[2..].join(" "))
                    .map_err(|e| format!("{}", e))?;
                Ok(String::new())
            }

            "popbuf" => {
                if args.len() != 2 {
                    return Err(
                        "Wrong command pattern: popbuf [path_to_buffile]".to_string()
                    );
                }
                self.service.pop_buffer(args[1]).map_err(|e| format!("{}", e))
            }

            _ => Err("Wrong command. Type [help] to get list of commands".to_string()),
        }
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
