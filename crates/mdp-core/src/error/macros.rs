//! Error macros for mdp

/// Macro for creating invalid input errors
#[macro_export]
macro_rules! bail_invalid {
    ($msg:expr) => {
        return Err($crate::error::MdpError::invalid_input($msg))
    };
    ($msg:expr, $($key:expr => $value:expr),+ $(,)?) => {
        return Err($crate::error::MdpError::invalid_input_with(
            $msg,
            vec![$(($key.to_string(), $crate::error::detail(&$value))),+],
        ))
    };
}
