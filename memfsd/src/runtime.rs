//! # Host Runtime
//!
//! Wires the command handler and namespace service into a runnable process:
//! an HTTP server loop or an interactive shell, optionally seeded from a
//! script of shell commands.

use crate::http;
use cli_console::CommandHandler;
use std::io::{self, BufRead, Read, Write};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tiny_http::{Header, Response, Server};

/// Host runtime error types
#[derive(Debug, Error)]
pub enum HostRuntimeError {
    #[error("Script error at line {line}: {message}")]
    Script { line: usize, message: String },

    #[error("Failed to bind {addr}: {message}")]
    Bind { addr: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Host mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostMode {
    /// Serve the namespace over HTTP
    Http,
    /// Interactive shell on stdin/stdout
    Shell,
}

/// Host runtime configuration
#[derive(Debug, Clone)]
pub struct HostRuntimeConfig {
    /// Host mode
    pub mode: HostMode,
    /// Listen address for HTTP mode
    pub listen: String,
    /// Optional seed script, applied before the mode starts
    pub script: Option<String>,
}

impl Default for HostRuntimeConfig {
    fn default() -> Self {
        Self {
            mode: HostMode::Http,
            listen: "127.0.0.1:4080".to_string(),
            script: None,
        }
    }
}

/// Host runtime
#[derive(Debug)]
pub struct HostRuntime {
    config: HostRuntimeConfig,
    handler: CommandHandler,
}

impl HostRuntime {
    /// Creates a runtime, applying the seed script if one is configured
    ///
    /// Blank lines and lines starting with `#` are skipped. A failing
    /// command aborts startup with its line number.
    pub fn new(config: HostRuntimeConfig) -> Result<Self, HostRuntimeError> {
        let mut handler = CommandHandler::new();

        if let Some(script) = &config.script {
            for (index, line) in script.lines().enumerate() {
                let trimmed = line.trim();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    continue;
                }
                handler
                    .execute(trimmed)
                    .map_err(|message| HostRuntimeError::Script {
                        line: index + 1,
                        message,
                    })?;
            }
        }

        Ok(Self { config, handler })
    }

    /// Runs the configured mode to completion
    pub fn run(self) -> Result<(), HostRuntimeError> {
        match self.config.mode {
            HostMode::Http => self.run_http(),
            HostMode::Shell => self.run_shell(),
        }
    }

    fn run_shell(mut self) -> Result<(), HostRuntimeError> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        println!("Enter [help] to display list of commands");
        loop {
            write!(stdout, "{} > ", self.handler.prompt())?;
            stdout.flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                // EOF
                return Ok(());
            }

            match self.handler.execute(line.trim_end()) {
                Ok(output) if output.is_empty() => {}
                Ok(output) => println!("{}", output),
                Err(message) => println!("ERROR: {}", message),
            }
        }
    }

    fn run_http(self) -> Result<(), HostRuntimeError> {
        let addr = self.config.listen.clone();
        let server = Server::http(&addr).map_err(|e| HostRuntimeError::Bind {
            addr: addr.clone(),
            message: e.to_string(),
        })?;
        let service = Arc::new(Mutex::new(self.handler.into_service()));

        log::info!("Serving filesystem on http://{}", addr);

        for mut request in server.incoming_requests() {
            let method = request.method().to_string();
            let url = request.url().to_string();

            let mut body = String::new();
            if let Err(e) = request.as_reader().read_to_string(&mut body) {
                log::warn!("Failed to read request body: {}", e);
                let _ = request.respond(Response::empty(400));
                continue;
            }

            // The whole namespace sits behind one lock; a poisoned lock
            // still holds a consistent tree, so recover and keep serving.
            let mut guard = match service.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            let api_response = http::route(&mut guard, &method, &url, &body);
            drop(guard);

            log::info!("{} {} -> {}", method, url, api_response.status);

            let mut response =
                Response::from_string(api_response.body).with_status_code(api_response.status);
            if api_response.is_json {
                if let Ok(header) =
                    Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                {
                    response = response.with_header(header);
                }
            }
            if let Err(e) = request.respond(response) {
                log::warn!("Failed to send response: {}", e);
            }
        }

        Ok(())
    }
}
