use std::time::Instant;

use log::LevelFilter;

/// Install a stderr logger prefixed with level, elapsed time and thread.
pub fn init_logger(level_filter: LevelFilter, epoch: Instant) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(move |out, message, record| {
            let elapsed = epoch.elapsed();
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let prefix = format!(
                "[{}] [{:>7.3}s] <{}>",
                record.level(),
                elapsed.as_secs_f64(),
                thread_name,
            );
            out.finish(format_args!("{prefix:<30}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stderr())
        .apply()
}
