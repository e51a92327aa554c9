use crate::catalog::Catalog;
use crate::command::{CommandFactory, ExecutableCommand, ExitCode};
use crate::interpreter::Factory;
use crate::loader;
use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::Path;

/// Menu commands known to the shell at compile time.
///
/// Each command is bound to one numeric menu choice and executed directly
/// in-process against the session's [`Catalog`].
pub(crate) trait MenuCommand: Sized + Default {
    /// The menu choice this command answers to, e.g. 1 for loading.
    fn choice() -> u32;

    /// Executes the command using the provided IO streams and catalog.
    ///
    /// Return value follows shell conventions: 0 for success, non-zero when
    /// the user was shown a problem.
    fn execute(
        self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
        catalog: &mut Catalog,
    ) -> Result<ExitCode>;
}

impl<T: MenuCommand> ExecutableCommand for T {
    fn execute(
        self: Box<Self>,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
        catalog: &mut Catalog,
    ) -> Result<ExitCode> {
        match T::execute(*self, input, output, catalog) {
            Ok(code) => Ok(code),
            Err(e) => {
                writeln!(output, "{}", e)?;
                Ok(1)
            }
        }
    }
}

impl<T: MenuCommand + 'static> CommandFactory for Factory<T> {
    fn try_create(&self, choice: u32) -> Option<Box<dyn ExecutableCommand>> {
        if choice == T::choice() {
            Some(Box::new(T::default()))
        } else {
            None
        }
    }
}

fn read_trimmed_line(input: &mut dyn BufRead) -> std::io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Menu choice 1: prompt for a filename and load/replace the catalog.
///
/// Replacement is wholesale; a load over an already-populated catalog
/// discards the old records entirely. When the file cannot be opened the
/// error is reported and the previous catalog state survives untouched.
#[derive(Default)]
pub(crate) struct LoadCourses {}

impl MenuCommand for LoadCourses {
    fn choice() -> u32 {
        1
    }

    fn execute(
        self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
        catalog: &mut Catalog,
    ) -> Result<ExitCode> {
        write!(output, "Enter the course data file name: ")?;
        output.flush()?;
        let path = read_trimmed_line(input)?;

        let courses = loader::load_catalog(Path::new(&path))?;
        let count = courses.len();
        catalog.replace(courses);
        writeln!(output, "Loaded {} course record(s) from {}.", count, path)?;
        Ok(0)
    }
}

/// Menu choice 2: print every course as `identifier, title`, one per line,
/// in identifier order.
#[derive(Default)]
pub(crate) struct ListCourses {}

impl MenuCommand for ListCourses {
    fn choice() -> u32 {
        2
    }

    fn execute(
        self,
        _input: &mut dyn BufRead,
        output: &mut dyn Write,
        catalog: &mut Catalog,
    ) -> Result<ExitCode> {
        for (identifier, title) in catalog.list_all()? {
            writeln!(output, "{}, {}", identifier, title)?;
        }
        Ok(0)
    }
}

/// Menu choice 3: prompt for an identifier and print the matching course
/// with its prerequisites, or `Course not found.`.
#[derive(Default)]
pub(crate) struct FindCourse {}

impl MenuCommand for FindCourse {
    fn choice() -> u32 {
        3
    }

    fn execute(
        self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
        catalog: &mut Catalog,
    ) -> Result<ExitCode> {
        write!(output, "Enter a course identifier: ")?;
        output.flush()?;
        let wanted = read_trimmed_line(input)?;

        match catalog.find(&wanted)? {
            Some(course) => {
                writeln!(output, "{}, {}", course.identifier, course.title)?;
                if course.prerequisites.is_empty() {
                    writeln!(output, "Prerequisites: None")?;
                } else {
                    writeln!(output, "Prerequisites: {}", course.prerequisites.join(" "))?;
                }
            }
            None => {
                writeln!(output, "Course not found.")?;
            }
        }
        Ok(0)
    }
}

/// Menu choice 4: say goodbye and flag the loop to terminate.
#[derive(Default)]
pub(crate) struct ExitShell {}

impl MenuCommand for ExitShell {
    fn choice() -> u32 {
        4
    }

    fn execute(
        self,
        _input: &mut dyn BufRead,
        output: &mut dyn Write,
        catalog: &mut Catalog,
    ) -> Result<ExitCode> {
        writeln!(output, "Exiting the course catalog.")?;
        catalog.should_exit = true;
        Ok(0)
    }
}
