use std::fmt::Display;

/// Turn the error of a `Result` into a `String` that carries some context.
///
/// The GUI reports failures as plain text, so library errors are converted at
/// the boundary.
pub trait ErrorStringExt<T> {
    fn err_to_string(self, msg: &str) -> Result<T, String>;
}

impl<T, E: Display> ErrorStringExt<T> for Result<T, E> {
    fn err_to_string(self, msg: &str) -> Result<T, String> {
        self.map_err(|err| {
            let msg = format!("{msg}: {err}");
            log::debug!("{}", msg);
            msg
        })
    }
}

impl<T> ErrorStringExt<T> for Option<T> {
    fn err_to_string(self, msg: &str) -> Result<T, String> {
        self.ok_or_else(|| msg.to_string())
    }
}
