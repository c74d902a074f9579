use console_logger::{sink::ConsoleSink, ColorMap, ConsoleLogger, Logger, Severity};

fn main() -> console_logger::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let mut logger = ConsoleLogger::new(ConsoleSink::Stdout);

    logger.log(Severity::Info, "This is a formatted info message.")?;
    logger.warn("The above log wasn't using the shorthand methods, they are much shorter!")?;

    let mut colored = ConsoleLogger::with_colors(ConsoleSink::Stdout, ColorMap::ansi());

    colored.log(Severity::Info, "This is a colored info message.")?;
    colored.error("Errors are red.")?;
    colored.severe("Severe errors get a red background.")?;

    Ok(())
}
