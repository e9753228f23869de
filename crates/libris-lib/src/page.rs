/// Functions the page markup calls by name, from inline handlers such as
/// `onclick="reserveBook(5)"` and from the page's own scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageFunction {
    ReserveBook,
    BorrowBook,
    UpdateBookStatus,
    ShowAlert,
    FormatCurrency,
    FormatDate,
    GetCookie,
    ShowLoadingSpinner,
    HideLoadingSpinner,
    CreatePaymentIntent,
}

impl PageFunction {
    pub const ALL: [PageFunction; 10] = [
        PageFunction::ReserveBook,
        PageFunction::BorrowBook,
        PageFunction::UpdateBookStatus,
        PageFunction::ShowAlert,
        PageFunction::FormatCurrency,
        PageFunction::FormatDate,
        PageFunction::GetCookie,
        PageFunction::ShowLoadingSpinner,
        PageFunction::HideLoadingSpinner,
        PageFunction::CreatePaymentIntent,
    ];

    /// Name of the global the function is installed under.
    pub fn js_name(&self) -> &'static str {
        match self {
            PageFunction::ReserveBook => "reserveBook",
            PageFunction::BorrowBook => "borrowBook",
            PageFunction::UpdateBookStatus => "updateBookStatus",
            PageFunction::ShowAlert => "showAlert",
            PageFunction::FormatCurrency => "formatCurrency",
            PageFunction::FormatDate => "formatDate",
            PageFunction::GetCookie => "getCookie",
            PageFunction::ShowLoadingSpinner => "showLoadingSpinner",
            PageFunction::HideLoadingSpinner => "hideLoadingSpinner",
            PageFunction::CreatePaymentIntent => "createPaymentIntent",
        }
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_inline_handler_names() {
        let names: Vec<&str> = PageFunction::ALL.iter().map(|f| f.js_name()).collect();
        assert!(names.contains(&"reserveBook"));
        assert!(names.contains(&"borrowBook"));
        assert!(names.contains(&"updateBookStatus"));
        assert!(names.contains(&"showAlert"));
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = PageFunction::ALL.iter().map(|f| f.js_name()).collect();
        assert_eq!(names.len(), PageFunction::ALL.len());
    }

    #[test]
    fn test_stripe_handler_is_not_a_page_function() {
        // installed separately, only when Stripe.js is on the page
        assert!(PageFunction::ALL
            .iter()
            .all(|f| f.js_name() != "handleStripePayment"));
    }
}
