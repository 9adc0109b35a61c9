//! Internal macros.

/// Emit a `tracing` debug event when the `tracing` feature is enabled.
///
/// Never pass secret values (private scalars, nonces) to this macro.
macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}
