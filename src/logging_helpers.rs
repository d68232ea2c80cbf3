/// Trace a call that an erasure wrapper forwards to the value it hides.
#[macro_export]
macro_rules! forward_log {
    ($wrapper:literal, $op:literal) => {
        tracing::event!(target: "erasure_forward", tracing::Level::TRACE, "{} forwarded `{}`", $wrapper, $op);
    };
    ($wrapper:literal, $op:literal, $key:expr) => {
        tracing::event!(target: "erasure_forward", tracing::Level::TRACE, "{} forwarded `{}` for key {:?}", $wrapper, $op, $key);
    };
}

cfg_if::cfg_if! {
    if #[cfg(feature = "file-log")] {
        /// Keeps the non-blocking writer flushing until dropped.
        pub type LogGuard = Option<tracing_appender::non_blocking::WorkerGuard>;

        pub fn init_subscriber(max_level: tracing::Level) -> LogGuard {
            let appender = tracing_appender::rolling::never("logs", "erasure-playground.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_max_level(max_level)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Some(guard)
        }
    } else {
        pub type LogGuard = Option<()>;

        pub fn init_subscriber(max_level: tracing::Level) -> LogGuard {
            tracing_subscriber::fmt().with_max_level(max_level).init();
            None
        }
    }
}
