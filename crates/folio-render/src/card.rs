//! Card construction.
//!
//! A [`CardTemplate`] turns one [`Project`] into an [`Element`] tree.
//! [`StandardCard`] produces the Bootstrap card used on the portfolio page:
//!
//! ```text
//! div.col-md-6.col-lg-4.mb-4.d-flex
//! └── div.card.flex-fill.h-100
//!     ├── img.card-img-top            (when `img` is set)
//!     └── div.card-body
//!         ├── h5.card-title
//!         ├── p.card-text
//!         ├── span badges, br
//!         ├── details per sub entry
//!         └── a action link, a source link
//! ```

use folio_core::{Project, SubEntry, non_empty};

use crate::Result;
use crate::diagnostics::{Diagnostics, Field};
use crate::links::{LinkClassifier, check_url};
use crate::markup::Element;
use crate::styles::TagStyles;

/// Classes on the outer grid column of every card.
pub const CARD_COLUMN_CLASS: &str = "col-md-6 col-lg-4 mb-4 d-flex";

/// Classes appended to every badge after its style category.
const BADGE_CLASS: &str = "me-1 mb-1";

/// Builds the markup for a single project.
pub trait CardTemplate {
    /// Build a card, reporting missing optional fields to `diagnostics`.
    ///
    /// An error aborts rendering of the whole list.
    fn build(&self, project: &Project, diagnostics: &mut Diagnostics) -> Result<Element>;
}

/// The portfolio page card.
#[derive(Debug, Clone, Default)]
pub struct StandardCard {
    styles: TagStyles,
    links: LinkClassifier,
}

impl StandardCard {
    /// Create a card template with the given style table and link rules.
    pub fn new(styles: TagStyles, links: LinkClassifier) -> Self {
        Self { styles, links }
    }

    /// Badge for one tag.
    pub fn badge(&self, tag: &str) -> Element {
        let class = match self.styles.style_for(tag) {
            "" => BADGE_CLASS.to_string(),
            style => format!("{style} {BADGE_CLASS}"),
        };
        Element::new("span").class(class).text(tag)
    }

    fn sub_entry(&self, sub: &SubEntry, diagnostics: &mut Diagnostics) -> Result<Element> {
        let mut details = Element::new("details")
            .class("mb-2 style")
            .child(Element::new("summary").class("fw-bold").text("Custom Content"))
            .child(small_paragraph(&sub.title))
            .child(small_paragraph(&sub.description));

        match sub.github() {
            Some(url) => {
                let url = check_url(&Field::GithubLink.to_string(), url)?;
                details.push(external_link(url, "btn btn-secondary", "Source Code"));
            }
            None => diagnostics.missing(sub.display_title(), Field::GithubLink),
        }

        Ok(details)
    }
}

impl CardTemplate for StandardCard {
    fn build(&self, project: &Project, diagnostics: &mut Diagnostics) -> Result<Element> {
        let title = project.title();
        let mut card = Element::new("div").class("card flex-fill h-100");

        match project.img() {
            Some(src) => {
                let src = check_url(&Field::Image.to_string(), src)?;
                let alt = non_empty(&project.title).unwrap_or("Project");
                card.push(
                    Element::new("img")
                        .attr("src", src)
                        .class("card-img-top")
                        .attr("alt", format!("{alt} image")),
                );
            }
            None => diagnostics.missing(title, Field::Image),
        }

        let mut body = Element::new("div")
            .class("card-body")
            .child(Element::new("h5").class("card-title").text(title))
            .child(Element::new("p").class("card-text").text(project.description()))
            .children(project.tags().iter().map(|tag| self.badge(tag)))
            .child(Element::new("br"));

        let entries = project.sub_entries();
        if entries.is_empty() {
            diagnostics.missing(title, Field::SubContent);
        }
        for sub in entries {
            body.push(self.sub_entry(sub, diagnostics)?);
        }

        match project.link() {
            Some(url) => {
                let url = check_url(&Field::ProjectLink.to_string(), url)?;
                body.push(external_link(
                    url,
                    "btn btn-primary me-2",
                    self.links.label_for(url),
                ));
            }
            None => diagnostics.missing(title, Field::ProjectLink),
        }

        match project.github() {
            Some(url) => {
                let url = check_url(&Field::GithubLink.to_string(), url)?;
                body.push(external_link(url, "btn btn-secondary", "Source Code"));
            }
            None => diagnostics.missing(title, Field::GithubLink),
        }

        card.push(body);
        Ok(Element::new("div").class(CARD_COLUMN_CLASS).child(card))
    }
}

fn small_paragraph(text: &str) -> Element {
    Element::new("p")
        .class("card-text")
        .child(Element::new("small").text(text))
}

fn external_link(href: &str, class: &str, label: &str) -> Element {
    Element::new("a")
        .attr("href", href)
        .class(class)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .text(label)
}

// ============================================================================
// Tests
// ============================================================================
