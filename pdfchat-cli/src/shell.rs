//! The interactive shell: a REPL driving the ingest-and-ask workflow.
//!
//! User interactions follow an explicit state machine:
//!
//! ```text
//! Idle → Uploading → Processing → Idle     (ingest path)
//! Idle → Querying → Idle                   (query path)
//! ```
//!
//! `list` and `delete` are one-shot actions with no intermediate state.
//! Each command runs to completion — including the network calls to the
//! embedding and generation services — before the next prompt is shown.
//! Errors are printed to the shell surface and never retried.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use pdfchat_rag::{AnswerGenerator, RagPipeline, UploadedPdf};

/// Shell states. Only `Idle` accepts the next command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Idle,
    /// Reading the selected files from disk.
    Uploading,
    /// Extracting, chunking, embedding, and storing the batch.
    Processing,
    /// Retrieving context and generating an answer.
    Querying,
}

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Ingest the given PDF files into the collection.
    Ingest(Vec<PathBuf>),
    /// Ask a question against the stored documents.
    Ask(String),
    /// Show previews of every stored chunk.
    List,
    /// Delete the collection. No confirmation step.
    Delete,
    /// Print command help.
    Help,
    /// Leave the shell.
    Quit,
}

impl Command {
    /// Parse an input line. Empty lines mean "no command issued"; any
    /// non-empty line that is not a recognized command is a question.
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "ingest" => {
                Some(Command::Ingest(rest.split_whitespace().map(PathBuf::from).collect()))
            }
            "ask" if !rest.is_empty() => Some(Command::Ask(rest.to_string())),
            "list" if rest.is_empty() => Some(Command::List),
            "delete" if rest.is_empty() => Some(Command::Delete),
            "help" if rest.is_empty() => Some(Command::Help),
            "quit" | "exit" if rest.is_empty() => Some(Command::Quit),
            _ => Some(Command::Ask(line.to_string())),
        }
    }
}

/// The interactive shell over a pipeline and an answer generator.
pub struct Shell {
    pipeline: Arc<RagPipeline>,
    generator: AnswerGenerator,
    state: ShellState,
}

impl Shell {
    /// Create a shell over the given pipeline and generator.
    pub fn new(pipeline: Arc<RagPipeline>, generator: AnswerGenerator) -> Self {
        Self { pipeline, generator, state: ShellState::Idle }
    }

    fn enter(&mut self, state: ShellState) {
        debug!(from = ?self.state, to = ?state, "shell state transition");
        self.state = state;
    }

    /// Run the read-eval-print loop until `quit` or end of input.
    pub async fn run(&mut self) -> Result<()> {
        println!("Chat with your PDF documents. Type 'help' for commands.");

        let mut editor = DefaultEditor::new()?;
        loop {
            match editor.readline("pdfchat> ") {
                Ok(line) => {
                    let _ = editor.add_history_entry(line.as_str());
                    let Some(command) = Command::parse(&line) else {
                        continue;
                    };
                    if command == Command::Quit {
                        break;
                    }
                    self.handle(command).await;
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            }
        }

        Ok(())
    }

    /// Dispatch one command to completion, always returning to `Idle`.
    async fn handle(&mut self, command: Command) {
        match command {
            Command::Ingest(paths) => self.ingest(&paths).await,
            Command::Ask(question) => self.ask(&question).await,
            Command::List => self.list().await,
            Command::Delete => self.delete().await,
            Command::Help => Self::print_help(),
            Command::Quit => {}
        }
        self.enter(ShellState::Idle);
    }

    /// Ingestion path: Uploading (read files) then Processing (extract,
    /// chunk, embed, store). One unreadable file aborts the whole batch.
    async fn ingest(&mut self, paths: &[PathBuf]) {
        if paths.is_empty() {
            println!("Usage: ingest <file.pdf> [more.pdf ...]");
            return;
        }

        self.enter(ShellState::Uploading);
        let mut pdfs = Vec::with_capacity(paths.len());
        for path in paths {
            match UploadedPdf::read(path) {
                Ok(pdf) => pdfs.push(pdf),
                Err(e) => {
                    println!("Error: {e}");
                    return;
                }
            }
        }

        self.enter(ShellState::Processing);
        println!("Processing...");
        match self.pipeline.ingest_files(&pdfs).await {
            Ok(chunks) => println!(
                "Documents processed and stored: {} file(s), {} chunk(s).",
                pdfs.len(),
                chunks.len()
            ),
            Err(e) => println!("Error: {e}"),
        }
    }

    /// Query path: retrieve the top-k chunks, then generate the answer.
    async fn ask(&mut self, question: &str) {
        self.enter(ShellState::Querying);
        println!("Thinking...");

        let results = match self.pipeline.query(question).await {
            Ok(results) => results,
            Err(e) => {
                println!("Error: {e}");
                return;
            }
        };

        match self.generator.answer(question, &results).await {
            Ok(answer) => println!("Reply: {answer}"),
            Err(e) => println!("Error: {e}"),
        }
    }

    /// Show a short preview of every stored chunk.
    async fn list(&self) {
        match self.pipeline.list_all().await {
            Ok(chunks) if chunks.is_empty() => println!("No documents indexed."),
            Ok(chunks) => {
                println!("Stored documents ({}):", chunks.len());
                for (idx, chunk) in chunks.iter().enumerate() {
                    println!("Document {} preview: {}", idx + 1, preview(&chunk.text));
                    println!("---");
                }
            }
            Err(e) => println!("Error: {e}"),
        }
    }

    /// Delete the collection and everything in it.
    async fn delete(&self) {
        match self.pipeline.delete_collection().await {
            Ok(()) => println!(
                "Collection '{}' has been deleted.",
                self.pipeline.config().collection
            ),
            Err(e) => println!("Error: {e}"),
        }
    }

    fn print_help() {
        println!("Commands:");
        println!("  ingest <file.pdf> [more.pdf ...]   extract, chunk, embed, and store PDFs");
        println!("  ask <question>                     answer a question from the stored documents");
        println!("  list                               preview every stored chunk");
        println!("  delete                             delete the collection (no confirmation)");
        println!("  help                               show this help");
        println!("  quit                               leave the shell");
        println!();
        println!("Any other non-empty input is treated as a question.");
    }
}

/// First 200 characters of a chunk, with an ellipsis when truncated.
fn preview(text: &str) -> String {
    const PREVIEW_CHARS: usize = 200;
    if text.chars().count() <= PREVIEW_CHARS {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{truncated}...")
    }
}
