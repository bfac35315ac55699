//! Transient message area under the signup form.
//!
//! Each `show` bumps a ticket. A scheduled hide carries the ticket it was
//! scheduled for and only takes effect if no newer message replaced it.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MessageKind {
    #[default]
    Success,
    Error,
}

impl MessageKind {
    /// Style class applied to the message element.
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Identifies one shown message for its deferred hide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageTicket(u64);

#[derive(Clone, Debug, Default)]
pub struct MessageState {
    pub text: String,
    pub kind: MessageKind,
    pub visible: bool,
    ticket: u64,
}

impl MessageState {
    /// Replace the current message and make it visible.
    pub fn show(&mut self, kind: MessageKind, text: impl Into<String>) -> MessageTicket {
        self.ticket += 1;
        self.kind = kind;
        self.text = text.into();
        self.visible = true;
        MessageTicket(self.ticket)
    }

    /// Hide the message if `ticket` still names the one on screen.
    pub fn hide(&mut self, ticket: MessageTicket) -> bool {
        if ticket.0 != self.ticket {
            return false;
        }
        self.visible = false;
        true
    }

    /// Full class list for the message element.
    pub fn class(&self) -> String {
        if self.visible {
            self.kind.class().to_owned()
        } else {
            format!("{} hidden", self.kind.class())
        }
    }
}
