//! Logging convenience macros.
//!
//! Thin wrappers over `tracing` so call sites read uniformly across the
//! workspace. `success!` tags its event with a dedicated target that the
//! CLI formatter renders with its own symbol.

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "canon6::success", $($arg)*)
    };
}
