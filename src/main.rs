use tierlog::{Logger, color};
use tracing::{debug, info};

mod args;
mod log;

fn main() -> anyhow::Result<()> {
    let args = args::parse();

    log::init(log::level_from_verbosity(args.trace_verbosity));

    if args.no_color {
        color::set_enabled(false);
    }

    info!("running demo at threshold {}", args.level);
    let mut logger = Logger::new(args.level);

    logger.debug("This is a debug message.", 1);
    logger.debug_with_details(
        "This is a debug message with information: ",
        2,
        &[&42, &"and some text."],
    );
    logger.warn("This is a warning message.", 3);
    logger.notice("This is a notice message.", 4);
    logger.error("This is an error message.", 5);

    let fatal = logger.fatal("This is a fatal error message.", 6);
    if args.skip_fatal {
        if let Err(e) = &fatal {
            println!("Caught fatal: {e}");
        }
    }

    debug!("appending to {}", args.log_file.display());
    logger.log("This is a log message.", &args.log_file, 2);
    logger.log("This is another log message.", &args.log_file, 3);
    logger.debug_to_file("This is a debug message with file logging.", &args.log_file, 2);

    let fragment = logger.info(2, &[&"This is a warning message with info", &42]);
    logger.warn(&fragment, 2);

    if !args.skip_fatal {
        fatal?;
    }

    info!("demo done");
    Ok(())
}
