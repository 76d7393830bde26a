//! Personalized greeting widget.

#[cfg(test)]
#[path = "greeting_test.rs"]
mod greeting_test;

/// Greeting shown before anyone has entered a name.
pub const DEFAULT_WELCOME: &str = "Welcome To Website";

/// Error returned by [`Greeting::greet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GreetError {
    /// The name was empty after trimming.
    #[error("Please enter your name first!")]
    MissingName,
}

/// Greeting text for `name`.
#[must_use]
pub fn welcome_message(name: &str) -> String {
    format!("Hi {name}, Welcome To Website")
}

/// Name input buffer plus the last accepted name and greeting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Greeting {
    input: String,
    current_name: Option<String>,
    message: Option<String>,
}

impl Greeting {
    /// Track the name input as the user types.
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Last accepted name, if any.
    #[must_use]
    pub fn current_name(&self) -> Option<&str> {
        self.current_name.as_deref()
    }

    /// Text for the welcome element.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(DEFAULT_WELCOME)
    }

    /// Accept `raw_name`, store it, and clear the input.
    ///
    /// # Errors
    ///
    /// Returns [`GreetError::MissingName`] when `raw_name` is blank; the
    /// current name, message and input are left as they were.
    pub fn greet(&mut self, raw_name: &str) -> Result<String, GreetError> {
        let name = crate::validation::trim_blank(raw_name);
        if name.is_empty() {
            return Err(GreetError::MissingName);
        }
        let message = welcome_message(name);
        self.current_name = Some(name.to_owned());
        self.message = Some(message.clone());
        self.input.clear();
        log::debug!("greeting updated for {name}");
        Ok(message)
    }

    /// Greet using whatever is currently in the input buffer.
    ///
    /// # Errors
    ///
    /// Same as [`Greeting::greet`].
    pub fn greet_from_input(&mut self) -> Result<String, GreetError> {
        let raw = std::mem::take(&mut self.input);
        let result = self.greet(&raw);
        if result.is_err() {
            self.input = raw;
        }
        result
    }
}
