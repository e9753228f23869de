use libris_lib::catalogue::{matches_filter, matches_search};
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement};

use crate::utils::{child_text, element_by_id, listen, query_all_html, set_displayed};

const BOOK_CARD: &str = ".book-card";

pub fn mount() {
    match element_by_id::<HtmlInputElement>("searchInput") {
        Some(input) => listen(&input.clone(), "keyup", move |_| search(&input.value())),
        None => debug!("no search input on page"),
    }

    match element_by_id::<HtmlSelectElement>("filterSelect") {
        Some(select) => listen(&select.clone(), "change", move |_| filter(&select.value())),
        None => debug!("no filter select on page"),
    }
}

fn show_cards<F>(mut visible: F)
where
    F: FnMut(&HtmlElement) -> bool,
{
    for card in query_all_html(BOOK_CARD) {
        if let Err(e) = set_displayed(&card, visible(&card)) {
            error!("{}", e);
        }
    }
}

pub fn search(term: &str) {
    show_cards(|card| {
        let title = child_text(card, ".book-title");
        let author = child_text(card, ".book-author");
        matches_search(term, &title, &author)
    });
}

pub fn filter(value: &str) {
    show_cards(|card| matches_filter(value, card.get_attribute("data-status").as_deref()));
}
