use serde::Serialize;
use web_sys::{window, Document, Element};
use yew::prelude::*;

use crate::config;

#[derive(Clone, Debug, PartialEq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub path: &'static str,
}

#[derive(Serialize)]
struct PostalAddress {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "addressLocality")]
    locality: &'static str,
    #[serde(rename = "addressCountry")]
    country: &'static str,
}

#[derive(Serialize)]
struct LocalBusiness {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    url: String,
    telephone: &'static str,
    email: &'static str,
    description: &'static str,
    address: PostalAddress,
}

fn structured_data(meta: &PageMeta) -> String {
    let business = LocalBusiness {
        context: "https://schema.org",
        kind: "LocalBusiness",
        name: config::SITE_NAME,
        url: format!("{}{}", config::SITE_URL, meta.path),
        telephone: config::CONTACT_PHONE,
        email: config::CONTACT_EMAIL,
        description: meta.description,
        address: PostalAddress {
            kind: "PostalAddress",
            locality: "Bristol",
            country: "GB",
        },
    };
    serde_json::to_string(&business).unwrap_or_default()
}

// Finds the head element matching `selector`, creating it with `tag` if the
// page doesn't have one yet.
fn head_element(document: &Document, selector: &str, tag: &str) -> Option<Element> {
    if let Ok(Some(existing)) = document.query_selector(selector) {
        return Some(existing);
    }
    let element = document.create_element(tag).ok()?;
    document.head()?.append_child(&element).ok()?;
    Some(element)
}

fn apply(meta: &PageMeta) -> Option<()> {
    let document = window()?.document()?;
    document.set_title(&format!("{} | {}", meta.title, config::SITE_NAME));

    let description = head_element(&document, "meta[name='description']", "meta")?;
    description.set_attribute("name", "description").ok()?;
    description.set_attribute("content", meta.description).ok()?;

    let canonical = head_element(&document, "link[rel='canonical']", "link")?;
    canonical.set_attribute("rel", "canonical").ok()?;
    canonical
        .set_attribute("href", &format!("{}{}", config::SITE_URL, meta.path))
        .ok()?;

    let script = head_element(&document, "script#structured-data", "script")?;
    script.set_id("structured-data");
    script.set_attribute("type", "application/ld+json").ok()?;
    script.set_text_content(Some(&structured_data(meta)));
    Some(())
}

/// Keeps the document head in step with the page being shown.
#[hook]
pub fn use_page_meta(meta: PageMeta) {
    use_effect_with_deps(
        |meta: &PageMeta| {
            if apply(meta).is_none() {
                log::warn!("Could not update head metadata for {}", meta.path);
            }
            || ()
        },
        meta,
    );
}
