//! Interactive catalog session.
//!
//! The session owns the record store. It imports a category when it starts,
//! then reads one command per line until `quit` or end of input:
//!
//! ```text
//! bookshelf> list
//! bookshelf> add --title "Dune" --authors "Frank Herbert"
//! bookshelf> edit 1719999999999 --title "Dune Messiah"
//! bookshelf> delete /works/OL893415W
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::importer::{CatalogImporter, ImportOutcome, SubjectSource};
use crate::store::RecordStore;
use crate::views::list::render_detail;
use crate::views::{copy_with_next_image, cycle_image, AddForm, EditForm, FormError, ListView};

const PROMPT: &str = "bookshelf> ";

/// One shell line, parsed by clap
#[derive(Parser, Debug)]
#[command(name = "bookshelf", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    /// List all books
    #[command(alias = "ls")]
    List,

    /// Show one book
    Show { id: String },

    /// Add a book
    Add {
        #[arg(short, long, default_value = "", allow_hyphen_values = true)]
        title: String,

        #[arg(short, long, default_value = "", allow_hyphen_values = true)]
        authors: String,

        /// Image URL (new-book placeholder if omitted)
        #[arg(short, long)]
        image: Option<String>,

        #[arg(short, long)]
        status: Option<String>,
    },

    /// Edit a book by id
    Edit {
        id: String,

        #[arg(short, long, allow_hyphen_values = true)]
        title: Option<String>,

        #[arg(short, long, allow_hyphen_values = true)]
        authors: Option<String>,

        #[arg(short, long)]
        image: Option<String>,

        #[arg(short, long)]
        status: Option<String>,
    },

    /// Delete a book by id
    #[command(alias = "rm")]
    Delete { id: String },

    /// Add a copy of a book with a different image
    Copy { id: String },

    /// Switch a book to the next placeholder image
    Cycle { id: String },

    /// Replace the catalog with a subject from Open Library
    Import {
        /// Subject name (configured default if omitted)
        category: Option<String>,
    },

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Whether the session keeps reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// An interactive session over one record store
pub struct Session<S> {
    store: RecordStore,
    importer: CatalogImporter<S>,
}

impl<S: SubjectSource> Session<S> {
    /// New session with an empty store
    pub fn new(importer: CatalogImporter<S>) -> Self {
        Self::with_store(importer, RecordStore::new())
    }

    /// New session over an existing store
    pub fn with_store(importer: CatalogImporter<S>, mut store: RecordStore) -> Self {
        store.subscribe(|event, records| {
            debug!(%event, records = records.len(), "Catalog changed");
        });
        Self { store, importer }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Import the starting category (or the default)
    pub async fn start(&mut self, category: Option<&str>) -> ImportOutcome {
        self.importer
            .import_category(&mut self.store, category.unwrap_or_default())
            .await
    }

    /// Import at start, then process lines from `input` until quit or EOF
    pub async fn run<R: BufRead, W: Write>(
        &mut self,
        category: Option<&str>,
        input: R,
        mut out: W,
    ) -> Result<()> {
        let outcome = self.start(category).await;
        report_import(&outcome, &mut out)?;

        let mut lines = input.lines();
        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            let Some(line) = lines.next() else {
                writeln!(out)?;
                break;
            };
            let line = line.context("Failed to read command")?;

            if self.execute(&line, &mut out).await? == Flow::Quit {
                break;
            }
        }

        Ok(())
    }

    /// Run a single command line
    pub async fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let words = match split_line(line) {
            Ok(words) => words,
            Err(e) => {
                writeln!(out, "{}", e)?;
                return Ok(Flow::Continue);
            }
        };
        if words.is_empty() {
            return Ok(Flow::Continue);
        }

        let parsed = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(e) => {
                write!(out, "{}", e.render())?;
                return Ok(Flow::Continue);
            }
        };

        match parsed.command {
            ShellCommand::List => {
                write!(out, "{}", ListView::new(&self.store).render())?;
            }
            ShellCommand::Show { id } => match self.store.get(&id) {
                Some(record) => write!(out, "{}", render_detail(record))?,
                None => writeln!(out, "{}", FormError::NotFound(id))?,
            },
            ShellCommand::Add {
                title,
                authors,
                image,
                status,
            } => {
                let mut form = AddForm::new().title(title).authors(authors);
                if let Some(image) = image {
                    form = form.image(image);
                }
                if let Some(status) = status {
                    form = form.status(status);
                }

                match form.submit(&mut self.store) {
                    Ok(id) => writeln!(out, "Added {}", id)?,
                    Err(e) => writeln!(out, "{}", e)?,
                }
            }
            ShellCommand::Edit {
                id,
                title,
                authors,
                image,
                status,
            } => {
                self.edit(&id, title, authors, image, status, out)?;
            }
            ShellCommand::Delete { id } => match self.store.delete(&id) {
                Some(record) => writeln!(out, "Deleted \"{}\"", record.title)?,
                None => writeln!(out, "{}", FormError::NotFound(id))?,
            },
            ShellCommand::Copy { id } => {
                match copy_with_next_image(&mut self.store, &id, &mut rand::rng()) {
                    Some(copy_id) => writeln!(out, "Added copy {}", copy_id)?,
                    None => writeln!(out, "{}", FormError::NotFound(id))?,
                }
            }
            ShellCommand::Cycle { id } => {
                if cycle_image(&mut self.store, &id) {
                    let image = self
                        .store
                        .get(&id)
                        .map(|r| r.image.as_str())
                        .unwrap_or_default();
                    writeln!(out, "Image changed to {}", image)?;
                } else {
                    writeln!(out, "{}", FormError::NotFound(id))?;
                }
            }
            ShellCommand::Import { category } => {
                let outcome = self.start(category.as_deref()).await;
                report_import(&outcome, out)?;
            }
            ShellCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn edit<W: Write>(
        &mut self,
        id: &str,
        title: Option<String>,
        authors: Option<String>,
        image: Option<String>,
        status: Option<String>,
        out: &mut W,
    ) -> Result<()> {
        let mut form = match EditForm::open(&self.store, id) {
            Ok(form) => form,
            Err(e) => {
                // Not found: report and fall back to the list
                writeln!(out, "{}", e)?;
                write!(out, "{}", ListView::new(&self.store).render())?;
                return Ok(());
            }
        };

        if title.is_none() && authors.is_none() && image.is_none() && status.is_none() {
            write!(out, "{}", render_detail(form.record()))?;
            writeln!(out, "Nothing to change")?;
            return Ok(());
        }

        if let Some(title) = title {
            form = form.title(title);
        }
        if let Some(authors) = authors {
            form = form.authors(authors);
        }
        if let Some(image) = image {
            form = form.image(image);
        }
        if let Some(status) = status {
            form = form.status(status);
        }

        match form.submit(&mut self.store) {
            Ok(()) => writeln!(out, "Updated {}", id)?,
            Err(e) => writeln!(out, "{}", e)?,
        }
        Ok(())
    }
}

fn report_import<W: Write>(outcome: &ImportOutcome, out: &mut W) -> Result<()> {
    match outcome {
        ImportOutcome::Imported { category, count } => {
            writeln!(out, "Imported {} books from \"{}\"", count, category)?;
        }
        ImportOutcome::Failed { category, error } => {
            writeln!(out, "Could not import \"{}\": {}", category, error)?;
        }
    }
    Ok(())
}

/// Split a command line into words, honouring quotes and backslash escapes
fn split_line(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('"'), '\\') | (None, '\\') => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
                in_word = true;
            }
            (Some(_), c) => current.push(c),
            (None, '"') | (None, '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        anyhow::bail!("Unterminated {} quote", q);
    }
    if in_word {
        words.push(current);
    }

    Ok(words)
}
