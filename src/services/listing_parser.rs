use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::RenderedPage;

static LISTING_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.exhibitor-listing").unwrap());

pub struct ListingDocument {
    html: Html,
}

impl ListingDocument {
    pub fn parse(page: &RenderedPage) -> Self {
        ListingDocument {
            html: Html::parse_document(&page.markup),
        }
    }

    /// Exhibitor fragments in document order. Empty when the page has none.
    pub fn fragments(&self) -> Vec<ElementRef<'_>> {
        self.html.select(&LISTING_SELECTOR).collect()
    }
}
