use crate::core::catalog::Catalog;
use crate::domain::model::Item;
use crate::domain::ports::{Borrowable, Describe};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

const NOT_BORROWABLE: &str = "Book not found or not borrowable.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    Borrow,
    Return,
    Exit,
    Invalid,
}

impl MenuChoice {
    /// Reads the first whitespace-separated token; the rest of the line is ignored.
    pub fn parse(line: &str) -> Self {
        let token = line.split_whitespace().next().unwrap_or("");
        match token.parse::<i64>() {
            Ok(1) => MenuChoice::List,
            Ok(2) => MenuChoice::Borrow,
            Ok(3) => MenuChoice::Return,
            Ok(4) => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

/// Text menu over a borrowed catalog.
///
/// Generic over its input and output so it can be driven by stdin/stdout or
/// by in-memory buffers.
pub struct Session<'a, R, W> {
    catalog: &'a mut Catalog,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(catalog: &'a mut Catalog, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
        }
    }

    /// Runs until the user picks Exit or the input ends.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!(items = self.catalog.len(), "session started");
        loop {
            self.print_menu()?;
            let Some(line) = self.read_choice_line()? else {
                break;
            };

            let choice = MenuChoice::parse(&line);
            tracing::debug!(?choice, "menu choice");
            let keep_going = match choice {
                MenuChoice::List => {
                    self.list_available()?;
                    true
                }
                MenuChoice::Borrow => self.borrow()?,
                MenuChoice::Return => self.return_book()?,
                MenuChoice::Exit => {
                    writeln!(self.output, "Exiting the Library System. Goodbye!")?;
                    false
                }
                MenuChoice::Invalid => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }
        self.output.flush()?;
        tracing::info!("session ended");
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\nLibrary System: Choose an option:")?;
        writeln!(self.output, "1. List available items")?;
        writeln!(self.output, "2. Borrow a book")?;
        writeln!(self.output, "3. Return a book")?;
        writeln!(self.output, "4. Exit")?;
        self.prompt("Enter your choice: ")
    }

    fn list_available(&mut self) -> Result<()> {
        for item in self.catalog.list_available() {
            writeln!(self.output, "{}", item.describe())?;
        }
        Ok(())
    }

    // Returns false when input ran out mid-prompt.
    fn borrow(&mut self) -> Result<bool> {
        self.prompt("Enter the book title to borrow: ")?;
        let Some(title) = self.read_line()? else {
            return Ok(false);
        };

        if !matches!(self.catalog.find_by_title(&title), Ok(Item::Book(_))) {
            writeln!(self.output, "{}", NOT_BORROWABLE)?;
            return Ok(true);
        }

        self.prompt("Enter your name: ")?;
        let Some(name) = self.read_line()? else {
            return Ok(false);
        };

        match self.catalog.find_by_title_mut(&title) {
            Ok(Item::Book(book)) => {
                let outcome = book.borrow(&name);
                writeln!(self.output, "{}", outcome)?;
            }
            Ok(Item::Periodical(_)) | Err(_) => writeln!(self.output, "{}", NOT_BORROWABLE)?,
        }
        Ok(true)
    }

    fn return_book(&mut self) -> Result<bool> {
        self.prompt("Enter the book title to return: ")?;
        let Some(title) = self.read_line()? else {
            return Ok(false);
        };

        match self.catalog.find_by_title_mut(&title) {
            Ok(Item::Book(book)) => {
                let outcome = book.return_item();
                writeln!(self.output, "{}", outcome)?;
            }
            Ok(Item::Periodical(_)) | Err(_) => writeln!(self.output, "{}", NOT_BORROWABLE)?,
        }
        Ok(true)
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    // Blank lines are skipped without re-prompting.
    fn read_choice_line(&mut self) -> Result<Option<String>> {
        while let Some(line) = self.read_line()? {
            if !line.trim().is_empty() {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
