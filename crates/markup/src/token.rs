/// Lexical unit produced by [`crate::tokenizer::tokenize`].
///
/// Tag names arrive lower-cased; attribute values are captured for
/// double-quoted `name="value"` syntax only. Tokens are transient:
/// the tree builder consumes the stream exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Open {
        name: String,
        attributes: Vec<(String, String)>,
    },
    Close(String),
    SelfClose(String),
    Text(String),
}

impl Token {
    /// Tag name for tag tokens, `None` for text.
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Token::Open { name, .. } => Some(name),
            Token::Close(name) | Token::SelfClose(name) => Some(name),
            Token::Text(_) => None,
        }
    }
}
