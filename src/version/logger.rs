//! Diagnostic logging seam for version comparison

#[cfg(test)]
use mockall::automock;

/// Trait for receiving debug traces from the orderer
///
/// Implementations must not influence ordering; they only observe it.
#[cfg_attr(test, automock)]
pub trait DebugLogger {
    /// Whether `debug` wants messages at all. Callers skip formatting when false.
    fn enabled(&self) -> bool {
        true
    }

    fn debug(&self, message: &str);
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl DebugLogger for NoopLogger {
    fn enabled(&self) -> bool {
        false
    }

    fn debug(&self, _message: &str) {}
}

/// Forwards messages to `tracing` at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl DebugLogger for TracingLogger {
    fn enabled(&self) -> bool {
        tracing::enabled!(tracing::Level::DEBUG)
    }

    fn debug(&self, message: &str) {
        tracing::debug!("{}", message);
    }
}

impl<L: DebugLogger + ?Sized> DebugLogger for &L {
    fn enabled(&self) -> bool {
        (**self).enabled()
    }

    fn debug(&self, message: &str) {
        (**self).debug(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_logger_is_disabled() {
        assert!(!NoopLogger.enabled());
        NoopLogger.debug("ignored");
    }

    fn trace<L: DebugLogger>(logger: L) {
        if logger.enabled() {
            logger.debug("hello");
        }
    }

    #[test]
    fn reference_forwards_to_inner_logger() {
        let mut mock = MockDebugLogger::new();
        mock.expect_enabled().times(1).return_const(true);
        mock.expect_debug()
            .withf(|message| message.contains("hello"))
            .times(1)
            .return_const(());

        trace(&mock);
    }

    #[test]
    fn disabled_logger_receives_no_messages() {
        let mut mock = MockDebugLogger::new();
        mock.expect_enabled().times(1).return_const(false);
        mock.expect_debug().never();

        trace(&mock);
    }
}
