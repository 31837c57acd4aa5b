//! Crate-internal logging macros.
//!
//! Forward to the `log` facade when the `logging` feature is enabled and
//! compile to nothing otherwise. Arguments are still type-checked in both
//! configurations.

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        ::log::trace!($($arg)*);
        #[cfg(not(feature = "logging"))]
        let _ = ::core::format_args!($($arg)*);
    }};
}

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        ::log::debug!($($arg)*);
        #[cfg(not(feature = "logging"))]
        let _ = ::core::format_args!($($arg)*);
    }};
}

macro_rules! info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        ::log::info!($($arg)*);
        #[cfg(not(feature = "logging"))]
        let _ = ::core::format_args!($($arg)*);
    }};
}

macro_rules! error {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        ::log::error!($($arg)*);
        #[cfg(not(feature = "logging"))]
        let _ = ::core::format_args!($($arg)*);
    }};
}
