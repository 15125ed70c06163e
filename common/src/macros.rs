/// Prints a raw console line.
#[macro_export]
macro_rules! mprint {
    () => {
        $crate::print::print("");
    };
    ($msg:expr) => {
        $crate::print::print($msg);
    };
}

/// Reports a completed step.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "ouiconv::status", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        ::tracing::warn!(target: "ouiconv::status", $($arg)*)
    };
}
