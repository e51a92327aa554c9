use course_catalog::{Interpreter, logger};

fn main() -> anyhow::Result<()> {
    logger::init();

    let mut shell = Interpreter::default();
    shell.repl()?;
    Ok(())
}
