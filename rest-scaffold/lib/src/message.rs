use std::fmt;

use serde::{Deserialize, Serialize};

/// How loudly a [`UserMessage`] should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Error,
}

/// The messages shown to the user at the end of an invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UserMessage {
    NoFileSelected,
    NoClassFound,
    Generating { class_name: String },
    /// A failure after resolution succeeded (I/O, collisions, strict types).
    Failed { reason: String },
}

impl UserMessage {
    pub fn level(&self) -> MessageLevel {
        match self {
            Self::Generating { .. } => MessageLevel::Info,
            Self::NoFileSelected | Self::NoClassFound | Self::Failed { .. } => MessageLevel::Error,
        }
    }

    /// Dialog-style title matching the level.
    pub fn title(&self) -> &'static str {
        match self.level() {
            MessageLevel::Info => "In Progress",
            MessageLevel::Error => "Error",
        }
    }
}

impl fmt::Display for UserMessage {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFileSelected => formatter.write_str("No file selected"),
            Self::NoClassFound => formatter.write_str("No class found in the selected file."),
            Self::Generating { class_name } => {
                write!(formatter, "Generating REST components for {class_name}")
            }
            Self::Failed { reason } => formatter.write_str(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_exact_texts() {
        assert_eq!(UserMessage::NoFileSelected.to_string(), "No file selected");
        assert_eq!(
            UserMessage::NoClassFound.to_string(),
            "No class found in the selected file."
        );
        assert_eq!(
            UserMessage::Generating {
                class_name: "Order".to_string()
            }
            .to_string(),
            "Generating REST components for Order"
        );
    }

    #[test]
    fn only_generating_is_informational() {
        let generating = UserMessage::Generating {
            class_name: "Order".to_string(),
        };
        assert_eq!(generating.level(), MessageLevel::Info);
        assert_eq!(generating.title(), "In Progress");
        assert_eq!(UserMessage::NoClassFound.level(), MessageLevel::Error);
    }
}
