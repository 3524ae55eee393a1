use crate::models::{Message, Role};
use crate::persona::GREETING;

/// Append-only chat log owned by one mounted widget.
///
/// The log is never empty: it starts with the assistant greeting, and the only
/// mutation is [`ConversationStore::append`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationStore {
    messages: Vec<Message>,
}

impl ConversationStore {
    /// A fresh log holding only the greeting.
    pub fn initialize() -> Self {
        Self { messages: vec![Message::assistant(GREETING)] }
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// The messages replayed to the model as prior dialogue. A leading
    /// assistant message is the greeting and is left out.
    pub fn history(&self) -> impl Iterator<Item = &Message> + Clone + '_ {
        let skip = match self.messages.first() {
            Some(first) if first.role == Role::Assistant => 1,
            _ => 0,
        };
        self.messages.iter().skip(skip)
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::initialize()
    }
}
