//! View-model for the login form's error region.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

/// Error state bound to `#error-block`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginModel {
    pub error_info: String,
    pub busy: bool,
}

impl LoginModel {
    /// Clear any visible error message.
    pub fn hide_messages(&mut self) {
        self.error_info.clear();
    }

    /// Show `message` in the error region.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error_info = message.into();
    }

    /// Whether the `.error-box` should be visible.
    pub fn error_visible(&self) -> bool {
        !self.error_info.is_empty()
    }

    /// Enter the in-flight state. Returns `false` if a request is already running.
    pub fn begin_submit(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.hide_messages();
        true
    }

    /// Leave the in-flight state, optionally showing an error.
    pub fn finish_submit(&mut self, error: Option<String>) {
        self.busy = false;
        if let Some(message) = error {
            self.show_error(message);
        }
    }
}
