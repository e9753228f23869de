use serde::{Deserialize, Serialize};

use super::{BookId, BookStatus};

pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BookAction {
    Reserve,
    Borrow,
}

impl BookAction {
    pub const ALL: [BookAction; 2] = [BookAction::Reserve, BookAction::Borrow];

    pub fn slug(&self) -> &'static str {
        match self {
            BookAction::Reserve => "reserve",
            BookAction::Borrow => "borrow",
        }
    }

    pub fn path(&self, id: &BookId) -> String {
        format!("/books/{}/{}/", id, self.slug())
    }

    /// Attribute carrying the book id on this action's button.
    pub fn button_attribute(&self) -> &'static str {
        match self {
            BookAction::Reserve => "data-book-id",
            BookAction::Borrow => "data-borrow-book-id",
        }
    }

    pub fn idle_label(&self) -> &'static str {
        match self {
            BookAction::Reserve => "Reserve",
            BookAction::Borrow => "Borrow",
        }
    }

    pub fn done_label(&self) -> &'static str {
        match self {
            BookAction::Reserve => "Reserved",
            BookAction::Borrow => "Borrowed",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            BookAction::Reserve => "Book reserved successfully!",
            BookAction::Borrow => "Book borrowed successfully!",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            BookAction::Reserve => "Reservation failed",
            BookAction::Borrow => "Borrowing failed",
        }
    }

    /// Status the book's badge moves to once the action succeeds.
    pub fn resulting_status(&self) -> Option<BookStatus> {
        match self {
            BookAction::Reserve => None,
            BookAction::Borrow => Some(BookStatus::borrowed()),
        }
    }
}

/// Body returned by the reserve and borrow endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
impl ActionResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: Option<&str>) -> Self {
        Self {
            success: false,
            error: error.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_action_path() {
        let id = BookId::from(12);
        assert_eq!(BookAction::Reserve.path(&id), "/books/12/reserve/");
        assert_eq!(BookAction::Borrow.path(&id), "/books/12/borrow/");
    }

    #[test]
    fn test_response_missing_success_is_falsy() {
        let res: ActionResponse = serde_json::from_str(r#"{"error": "Not a member"}"#).unwrap();
        assert!(!res.success);
        assert_eq!(res.error.as_deref(), Some("Not a member"));

        let res: ActionResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(res, ActionResponse::ok());
    }
}
