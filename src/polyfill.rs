#[macro_use]
mod definitions {
    use cfg_if::cfg_if;

    cfg_if! {
        if #[cfg(feature = "tracing")] {
            macro_rules! log_trace {
                ($($arg:tt)+) => { ::tracing::trace!($($arg)+) };
            }

            macro_rules! log_warn {
                ($($arg:tt)+) => { ::tracing::warn!($($arg)+) };
            }
        } else {
            // Arguments are discarded unevaluated, so they must be free of side effects.
            macro_rules! log_trace {
                ($($arg:tt)+) => {};
            }

            macro_rules! log_warn {
                ($($arg:tt)+) => {};
            }
        }
    }
}
