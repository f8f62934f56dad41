use std::fmt;

/// Error for `set <name> <value>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    UnknownOption { name: String },
    InvalidValue { name: String, value: String },
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            OptionError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for OptionError {}

/// Session settings for the console driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleOptions {
    /// Draw Unicode chess symbols instead of letters
    pub glyphs: bool,
    /// Redraw the board after every state change
    pub autoshow: bool,
    /// Mark the selection and its destinations when drawing
    pub highlight: bool,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        ConsoleOptions {
            glyphs: false,
            autoshow: false,
            highlight: true,
        }
    }
}

fn parse_switch(name: &str, value: &str) -> Result<bool, OptionError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" => Ok(true),
        "off" | "false" | "0" => Ok(false),
        _ => Err(OptionError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

impl ConsoleOptions {
    /// Apply `set <name> <value>`. Options are left unchanged on error.
    pub fn apply_set(&mut self, name: &str, value: Option<&str>) -> Result<(), OptionError> {
        let normalized = name.trim().to_ascii_lowercase();
        let value = value.unwrap_or("");
        match normalized.as_str() {
            "glyphs" => {
                self.glyphs = match value.trim().to_ascii_lowercase().as_str() {
                    "unicode" => true,
                    "letters" => false,
                    _ => {
                        return Err(OptionError::InvalidValue {
                            name: normalized.clone(),
                            value: value.to_string(),
                        })
                    }
                };
            }
            "autoshow" => self.autoshow = parse_switch(&normalized, value)?,
            "highlight" => self.highlight = parse_switch(&normalized, value)?,
            _ => return Err(OptionError::UnknownOption { name: normalized.clone() }),
        }
        Ok(())
    }

    /// One `option <name> <value>` line per setting.
    #[must_use]
    pub fn describe(&self) -> Vec<String> {
        let switch = |on: bool| if on { "on" } else { "off" };
        vec![
            format!(
                "option glyphs {}",
                if self.glyphs { "unicode" } else { "letters" }
            ),
            format!("option autoshow {}", switch(self.autoshow)),
            format!("option highlight {}", switch(self.highlight)),
        ]
    }
}
