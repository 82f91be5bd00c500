use std::fmt;

pub type User = String;
/// All possible kinds of normal messages
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Message {
    Text(String),
}

impl Message {
    pub fn text(text: impl Into<String>) -> Self {
        Message::Text(text.into())
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Text(text) => {
                write!(f, "{}", text.trim())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_trims() {
        assert_eq!(Message::text("  hello\n").to_string(), "hello");
    }
}
