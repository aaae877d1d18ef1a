use std::sync::LazyLock;

use scraper::{ElementRef, Selector};
use url::Url;

use crate::domain::{classify, ExhibitorRecord, Field, NO_DESCRIPTION};

/// Inline style fragment that marks the paragraph holding the stand number.
const STAND_MARKER: &str = "color: #d6e342";
const STAND_LABEL: &str = "Stand:";

static NAME: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h4.company-name").unwrap());
static STYLED_PARAGRAPH: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p[style]").unwrap());
static PROFILE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.company-profile").unwrap());
static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").unwrap());
static PRODUCTS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.products-list").unwrap());
static SERVICE_FIELD: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.service-field").unwrap());
static FIND_OUT_MORE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.find-out-more").unwrap());
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    #[error("cannot resolve `{href}` against {base}")]
    Resolve {
        href: String,
        base: Url,
        #[source]
        source: url::ParseError,
    },
}

/// `Ok(None)` means the markup for the field is not there.
type Lookup = Result<Option<String>, FieldError>;

/// Builds one record from an exhibitor fragment. Each field is looked up on
/// its own; a missing or broken field turns into its sentinel and the rest of
/// the record is still filled in.
pub fn extract(fragment: ElementRef<'_>, base_url: &Url) -> ExhibitorRecord {
    let name = extract_name(fragment);
    let exhibitor = match &name {
        Ok(Some(name)) => Some(name.clone()),
        _ => None,
    };
    let exhibitor = exhibitor.as_deref();

    let mut record = ExhibitorRecord {
        name: settle(Field::Name, name, exhibitor),
        stand: settle(Field::Stand, extract_stand(fragment), exhibitor),
        about: settle(Field::About, extract_about(fragment), exhibitor),
        products_services: settle(
            Field::ProductsServices,
            extract_products(fragment),
            exhibitor,
        ),
        website: settle(Field::Website, extract_website(fragment, base_url), exhibitor),
        ..Default::default()
    };
    record.category = classify(&record.about, &record.products_services);

    record
}

fn settle(field: Field, lookup: Lookup, exhibitor: Option<&str>) -> String {
    match lookup {
        Ok(Some(value)) => value,
        Ok(None) => field.missing_sentinel().to_string(),
        Err(e) => {
            match exhibitor {
                Some(name) => {
                    log::error!("{} extraction error for {}: {}", field.label(), name, e)
                }
                None => log::error!("{} extraction error: {}", field.label(), e),
            }
            field.error_sentinel()
        }
    }
}

fn first<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    scope.select(selector).next()
}

fn text(element: ElementRef<'_>) -> Option<String> {
    let text = element.text().collect::<String>();
    let text = text.trim();

    match text.is_empty() {
        true => None,
        false => Some(text.to_string()),
    }
}

fn extract_name(fragment: ElementRef<'_>) -> Lookup {
    Ok(first(fragment, &NAME).and_then(text))
}

fn extract_stand(fragment: ElementRef<'_>) -> Lookup {
    let stand = fragment.select(&STYLED_PARAGRAPH).find(|p| {
        p.value()
            .attr("style")
            .is_some_and(|style| style.to_lowercase().contains(STAND_MARKER))
    });

    Ok(stand.and_then(text).and_then(|raw| strip_stand_label(&raw)))
}

fn strip_stand_label(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let stand = raw.strip_prefix(STAND_LABEL).unwrap_or(raw).trim();

    match stand.is_empty() {
        true => None,
        false => Some(stand.to_string()),
    }
}

fn extract_about(fragment: ElementRef<'_>) -> Lookup {
    let Some(profile) = first(fragment, &PROFILE) else {
        return Ok(None);
    };

    let about = first(profile, &PARAGRAPH)
        .and_then(text)
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    Ok(Some(about))
}

fn extract_products(fragment: ElementRef<'_>) -> Lookup {
    let Some(products) = first(fragment, &PRODUCTS) else {
        return Ok(None);
    };

    Ok(first(products, &SERVICE_FIELD).and_then(text))
}

fn extract_website(fragment: ElementRef<'_>, base_url: &Url) -> Lookup {
    let Some(find_out_more) = first(fragment, &FIND_OUT_MORE) else {
        return Ok(None);
    };
    let Some(anchor) = first(find_out_more, &ANCHOR) else {
        return Ok(None);
    };

    match anchor.value().attr("href") {
        Some(href) => resolve_website(href, base_url).map(Some),
        None => Ok(None),
    }
}

/// Absolute http(s) links are kept as written, anything else is resolved
/// relative to the listing page.
pub fn resolve_website(href: &str, base_url: &Url) -> Result<String, FieldError> {
    if href.starts_with("http://") || href.starts_with("https://") {
        return Ok(href.to_string());
    }

    base_url
        .join(href)
        .map(|url| url.to_string())
        .map_err(|source| FieldError::Resolve {
            href: href.to_string(),
            base: base_url.clone(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};
    use url::Url;

    use super::{extract, resolve_website, strip_stand_label};
    use crate::domain::{Category, ExhibitorRecord};

    const BASE: &str = "https://example.com/list/";

    fn extract_from(fragment: &str) -> ExhibitorRecord {
        let html = Html::parse_document(&format!(
            r#"<html><body><div class="exhibitor-listing">{}</div></body></html>"#,
            fragment
        ));
        let listing = Selector::parse("div.exhibitor-listing").unwrap();
        let element = html.select(&listing).next().unwrap();

        extract(element, &Url::parse(BASE).unwrap())
    }

    const FULL_LISTING: &str = r#"
        <h4 class="company-name">
            Deep Blue Robotics
        </h4>
        <p style="font-weight: bold; color: #D6E342;">Stand: B42</p>
        <div class="company-profile">
            <p>Builders of ROV systems for subsea inspection.</p>
            <p>Second paragraph is ignored.</p>
        </div>
        <div class="products-list">
            <div class="label">Products</div>
            <div class="service-field"> Remotely operated vehicles </div>
        </div>
        <div class="find-out-more"><a href="/partners">Find out more</a></div>
    "#;

    #[test]
    fn full_listing_is_extracted() {
        let record = extract_from(FULL_LISTING);

        assert_eq!(
            record,
            ExhibitorRecord {
                name: "Deep Blue Robotics".to_string(),
                stand: "B42".to_string(),
                about: "Builders of ROV systems for subsea inspection.".to_string(),
                products_services: "Remotely operated vehicles".to_string(),
                website: "https://example.com/partners".to_string(),
                category: Category::MarineTechnologies,
            }
        );
    }

    #[test]
    fn missing_stand_leaves_other_fields_intact() {
        let record = extract_from(
            r#"
            <h4 class="company-name">Tidal Sensors Ltd</h4>
            <p style="color: #333333">Not a stand line</p>
            <div class="company-profile"><p>Composite sensor housings</p></div>
            <div class="find-out-more"><a href="https://tidal.example">More</a></div>
            "#,
        );

        assert_eq!(record.stand, "Not Available");
        assert_eq!(record.name, "Tidal Sensors Ltd");
        assert_eq!(record.about, "Composite sensor housings");
        assert_eq!(record.products_services, "Not Available");
        assert_eq!(record.website, "https://tidal.example");
        assert_eq!(record.category, Category::AdvancedMaterials);
    }

    #[test]
    fn empty_fragment_is_all_sentinels() {
        let record = extract_from("<span>nothing here</span>");

        assert_eq!(record.name, "Name Not Found");
        assert_eq!(record.stand, "Not Available");
        assert_eq!(record.about, "Not Available");
        assert_eq!(record.products_services, "Not Available");
        assert_eq!(record.website, "Not Available");
        assert_eq!(record.category, Category::Other);
    }

    #[test]
    fn profile_without_paragraph_has_no_description() {
        let record = extract_from(
            r#"
            <h4 class="company-name">Quiet Co</h4>
            <div class="company-profile"><span>hi</span></div>
            "#,
        );

        assert_eq!(record.about, "No description");
    }

    #[test]
    fn products_container_without_service_field_is_not_available() {
        let record = extract_from(r#"<div class="products-list"><p>Boats</p></div>"#);

        assert_eq!(record.products_services, "Not Available");
    }

    #[test]
    fn anchor_without_href_is_not_available() {
        let record = extract_from(r#"<div class="find-out-more"><a>More</a></div>"#);

        assert_eq!(record.website, "Not Available");
    }

    #[test]
    fn unresolvable_href_only_breaks_the_website() {
        let record = extract_from(
            r#"
            <h4 class="company-name">Broken Link Inc</h4>
            <p style="color: #d6e342">Stand: C7</p>
            <div class="find-out-more"><a href="//[not-a-host">More</a></div>
            "#,
        );

        assert_eq!(record.website, "Error: Website Extraction");
        assert_eq!(record.name, "Broken Link Inc");
        assert_eq!(record.stand, "C7");
    }

    #[test]
    fn shared_selectors_stay_scoped_to_each_fragment() {
        let html = Html::parse_document(
            r#"
            <div class="exhibitor-listing">
                <h4 class="company-name">Harbour Drones</h4>
                <p style="color: #d6e342">Stand: D1</p>
                <div class="find-out-more"><a href="/harbour">More</a></div>
            </div>
            <div class="exhibitor-listing">
                <h4 class="company-name">Keel Composites</h4>
            </div>
            "#,
        );
        let listing = Selector::parse("div.exhibitor-listing").unwrap();
        let base = Url::parse(BASE).unwrap();

        let records: Vec<ExhibitorRecord> = html
            .select(&listing)
            .map(|fragment| extract(fragment, &base))
            .collect();

        assert_eq!(records[0].stand, "D1");
        assert_eq!(records[0].website, "https://example.com/harbour");
        assert_eq!(records[1].name, "Keel Composites");
        assert_eq!(records[1].stand, "Not Available");
        assert_eq!(records[1].website, "Not Available");
    }

    #[test]
    fn stand_label_is_stripped() {
        assert_eq!(strip_stand_label("Stand: B42"), Some("B42".to_string()));
        assert_eq!(strip_stand_label("  Stand:A1  "), Some("A1".to_string()));
        assert_eq!(strip_stand_label("D9"), Some("D9".to_string()));
        assert_eq!(strip_stand_label("Stand:"), None);
    }

    #[test]
    fn relative_href_is_resolved_against_base() {
        let base = Url::parse(BASE).unwrap();

        assert_eq!(
            resolve_website("/partners", &base).unwrap(),
            "https://example.com/partners"
        );
        assert_eq!(
            resolve_website("acme", &base).unwrap(),
            "https://example.com/list/acme"
        );
    }

    #[test]
    fn absolute_href_is_kept_verbatim() {
        let base = Url::parse(BASE).unwrap();

        assert_eq!(
            resolve_website("https://other.org", &base).unwrap(),
            "https://other.org"
        );
        assert_eq!(
            resolve_website("http://other.org/a b", &base).unwrap(),
            "http://other.org/a b"
        );
    }
}
