//! The project renderer: load a catalogue, fill a container.
//!
//! # Usage
//!
//! ```rust
//! use folio_core::Project;
//! use folio_render::{Container, ProjectRenderer, RenderState, StandardCard};
//!
//! let projects = vec![Project {
//!     title: Some("Atlas".to_string()),
//!     ..Project::default()
//! }];
//!
//! let mut container = Container::default();
//! let mut renderer = ProjectRenderer::new(StandardCard::default());
//! let report = renderer.render(&projects, &mut container);
//!
//! assert_eq!(report.cards, 1);
//! assert_eq!(renderer.state(), &RenderState::Rendered);
//! assert!(container.to_html().contains("Atlas"));
//! ```

use std::fmt;

use folio_core::{Project, ProjectSource, load_projects};

use crate::card::{CardTemplate, StandardCard};
use crate::container::Container;
use crate::diagnostics::{Diagnostics, MissingField};
use crate::markup::Element;

/// Text shown when there is nothing to list.
pub const EMPTY_MESSAGE: &str = "No projects to display at the moment.";

/// Lead text of the error panel.
pub const ERROR_MESSAGE: &str = "Unable to load projects. Please refresh or try again later.";

// ============================================================================
// RenderState
// ============================================================================

/// Where a renderer is in its single pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderState {
    /// Nothing has happened yet.
    Idle,
    /// Waiting on the catalogue source.
    Loading,
    /// Cards (or the empty-state message) are in the container.
    Rendered,
    /// Rendering stopped; the error panel is in the container.
    Failed(String),
}

impl RenderState {
    /// Returns `true` for `Rendered` and `Failed`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rendered | Self::Failed(_))
    }
}

impl fmt::Display for RenderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Loading => write!(f, "loading"),
            Self::Rendered => write!(f, "rendered"),
            Self::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

// ============================================================================
// Intro / RenderReport
// ============================================================================

/// Optional header emitted above the cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intro {
    /// Section heading
    pub heading: String,
    /// Lead paragraph
    pub text: String,
}

impl Default for Intro {
    fn default() -> Self {
        Self {
            heading: "My Work".to_string(),
            text: "Here is a selection of some of my recent projects.".to_string(),
        }
    }
}

/// Outcome of one render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    /// Cards appended to the container
    pub cards: usize,
    /// Missing optional fields, in the order they were found
    pub warnings: Vec<MissingField>,
    /// Error text when the pass failed
    pub error: Option<String>,
}

impl RenderReport {
    /// Whether the pass ended with the error panel.
    pub fn failed(&self) -> bool {
        self.error.is_some()
    }
}

// ============================================================================
// ProjectRenderer
// ============================================================================

/// Renders project cards into a [`Container`].
///
/// Each call starts by clearing the container, so calling twice replaces
/// rather than duplicates content.
#[derive(Debug)]
pub struct ProjectRenderer<T = StandardCard> {
    template: T,
    intro: Option<Intro>,
    state: RenderState,
}

impl<T: CardTemplate> ProjectRenderer<T> {
    /// Create a renderer around a card template.
    pub fn new(template: T) -> Self {
        Self {
            template,
            intro: None,
            state: RenderState::Idle,
        }
    }

    /// Emit an intro header before the cards.
    pub fn with_intro(mut self, intro: Intro) -> Self {
        self.intro = Some(intro);
        self
    }

    /// Current state.
    pub fn state(&self) -> &RenderState {
        &self.state
    }

    fn set_state(&mut self, state: RenderState) {
        log::info!("Project renderer → {state}");
        self.state = state;
    }

    /// Load the catalogue from `source`, then render it.
    ///
    /// Source failures degrade to an empty catalogue, so this only ends in
    /// `Failed` when a card cannot be built.
    pub async fn run(
        &mut self,
        source: &dyn ProjectSource,
        container: &mut Container,
    ) -> RenderReport {
        self.set_state(RenderState::Loading);
        container.clear();
        let projects = load_projects(source).await;
        self.render(&projects, container)
    }

    /// Render `projects` into `container`, one card per project in order.
    ///
    /// An empty list renders the empty-state message. If a card fails,
    /// the error panel is appended after the cards already written.
    pub fn render(&mut self, projects: &[Project], container: &mut Container) -> RenderReport {
        container.clear();
        if let Some(intro) = &self.intro {
            container.append(intro_block(intro));
        }

        let mut report = RenderReport::default();

        if projects.is_empty() {
            container.append(empty_block());
            self.set_state(RenderState::Rendered);
            return report;
        }

        let mut diagnostics = Diagnostics::new();
        for project in projects {
            match self.template.build(project, &mut diagnostics) {
                Ok(card) => {
                    container.append(card);
                    report.cards += 1;
                }
                Err(e) => {
                    let message = e.to_string();
                    log::error!("Unable to retrieve or display projects: {message}");
                    container.append(error_block(&message));
                    report.warnings = diagnostics.into_warnings();
                    report.error = Some(message.clone());
                    self.set_state(RenderState::Failed(message));
                    return report;
                }
            }
        }

        report.warnings = diagnostics.into_warnings();
        self.set_state(RenderState::Rendered);
        report
    }
}

impl Default for ProjectRenderer<StandardCard> {
    fn default() -> Self {
        Self::new(StandardCard::default())
    }
}

fn intro_block(intro: &Intro) -> Element {
    Element::new("div")
        .class("col-12 text-center")
        .child(Element::new("h2").class("mb-4").text(intro.heading.as_str()))
        .child(Element::new("p").text(intro.text.as_str()))
}

fn empty_block() -> Element {
    Element::new("div").class("col-12").child(
        Element::new("p")
            .class("text-center text-muted")
            .text(EMPTY_MESSAGE),
    )
}

fn error_block(message: &str) -> Element {
    Element::new("div").class("col-12").child(
        Element::new("div")
            .class("alert alert-danger")
            .attr("role", "alert")
            .text(ERROR_MESSAGE)
            .child(Element::new("br"))
            .text(message),
    )
}

// ============================================================================
// Tests
// ============================================================================
