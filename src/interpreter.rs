use crate::catalog::Catalog;
use crate::command::{CommandFactory, ExitCode};
use crate::error::CatalogError;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{BufRead, Write};

/// Factory allows creating instances of ExecutableCommand.
///
/// Only supports commands defined in this crate, i.e. the four menu commands.
pub(crate) struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

/// The interactive menu runner.
///
/// The interpreter owns the session's [`Catalog`] and a list of
/// [`CommandFactory`] objects that are queried to create commands by menu
/// choice. See [`Default`] for the standard menu included out of the box.
///
/// Example
/// ```
/// use course_catalog::Interpreter;
/// let mut shell = Interpreter::default();
/// let mut input = std::io::Cursor::new(Vec::<u8>::new());
/// let mut out: Vec<u8> = Vec::new();
/// // Listing before any load is reported, not fatal.
/// let code = shell.dispatch("2", &mut input, &mut out).unwrap();
/// assert_eq!(code, 1);
/// ```
pub struct Interpreter {
    catalog: Catalog,
    commands: Vec<Box<dyn CommandFactory>>,
}

impl Interpreter {
    /// Create an interpreter with a custom set of command factories.
    pub fn new(commands: Vec<Box<dyn CommandFactory>>) -> Self {
        Self {
            catalog: Catalog::new(),
            commands,
        }
    }

    /// Read-only view of the session catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Execute one menu line against the session state.
    ///
    /// The line is parsed as an integer choice and handed to the first
    /// factory that recognizes it. Non-numeric and out-of-range input is
    /// reported on `output` and leaves the catalog unchanged; neither is an
    /// error from the caller's point of view, so the loop can simply
    /// re-prompt.
    pub fn dispatch(
        &mut self,
        line: &str,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> anyhow::Result<ExitCode> {
        let choice: u32 = match line.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                writeln!(
                    output,
                    "{}",
                    CatalogError::InvalidChoice(line.trim().to_string())
                )?;
                return Ok(1);
            }
        };
        for factory in &self.commands {
            if let Some(cmd) = factory.try_create(choice) {
                return cmd.execute(input, output, &mut self.catalog);
            }
        }
        writeln!(output, "Invalid option. Please try again.")?;
        Ok(1)
    }

    /// Run the interactive session until the user exits.
    ///
    /// Menu choice 4 sets the catalog's `should_exit` flag, which terminates
    /// the loop normally. Readline interrupt / end-of-input end the session
    /// the same way a terminal would.
    pub fn repl(&mut self) -> rustyline::Result<()> {
        let mut rl = DefaultEditor::new()?;
        let mut stdout = std::io::stdout();

        while !self.catalog.should_exit {
            render_menu(&mut stdout)?;
            match rl.readline("Select an option: ") {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    let mut stdin = std::io::stdin().lock();
                    if let Err(err) = self.dispatch(&line, &mut stdin, &mut stdout) {
                        // Only broken console streams end up here.
                        tracing::warn!("menu command failed: {:#}", err);
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }
}

impl Default for Interpreter {
    /// Create an interpreter with the standard four-entry menu:
    /// load, list, find, exit.
    fn default() -> Self {
        use crate::menu::*;
        Self::new(vec![
            Box::new(Factory::<LoadCourses>::default()),
            Box::new(Factory::<ListCourses>::default()),
            Box::new(Factory::<FindCourse>::default()),
            Box::new(Factory::<ExitShell>::default()),
        ])
    }
}

fn render_menu(output: &mut dyn Write) -> std::io::Result<()> {
    writeln!(output)?;
    writeln!(output, "========================================")?;
    writeln!(output, "  Course Catalog")?;
    writeln!(output, "========================================")?;
    writeln!(output, "1) Load course data")?;
    writeln!(output, "2) List all courses")?;
    writeln!(output, "3) Look up a course")?;
    writeln!(output, "4) Exit")?;
    Ok(())
}
