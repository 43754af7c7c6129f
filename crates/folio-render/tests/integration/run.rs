//! Full load-and-render runs against in-memory sources.

use folio_render::renderer::EMPTY_MESSAGE;
use folio_render::{Container, ProjectRenderer, RenderState, StandardCard};

use crate::common::{CATALOGUE, NotFoundSource, PayloadSource, cards};

#[tokio::test]
async fn test_run_renders_catalogue() {
    let mut container = Container::default();
    let mut renderer = ProjectRenderer::new(StandardCard::default());

    let report = renderer.run(&PayloadSource::new(CATALOGUE), &mut container).await;

    assert_eq!(report.cards, 2);
    assert_eq!(renderer.state(), &RenderState::Rendered);
    assert_eq!(cards(&container).len(), 2);

    let html = container.to_html();
    assert!(html.starts_with(r#"<div id="projects-container" class="row">"#));
    assert!(html.contains(r#"<img src="img/weather.png" class="card-img-top" alt="Weather Board image">"#));
    assert!(html.contains(">Live Demo</a>"));
    assert!(html.contains(">Project Link</a>"));
    assert!(html.contains(r#"<summary class="fw-bold">Custom Content</summary>"#));

    // "Shop" has no image, sub content, or GitHub link.
    assert_eq!(report.warnings.len(), 3);
    assert!(report.warnings.iter().all(|w| w.project == "Shop"));
}

#[tokio::test]
async fn test_run_with_malformed_payloads_shows_placeholder() {
    for payload in ["{}", r#"{"projects": "x"}"#, "<html>not json</html>"] {
        let mut container = Container::default();
        let mut renderer = ProjectRenderer::new(StandardCard::default());

        let report = renderer.run(&PayloadSource::new(payload), &mut container).await;

        assert!(!report.failed(), "payload {payload:?}");
        assert_eq!(report.cards, 0);
        assert!(container.inner_html().contains(EMPTY_MESSAGE));
        assert!(!container.inner_html().contains("alert"));
    }
}

#[tokio::test]
async fn test_run_with_not_found_shows_placeholder() {
    let mut container = Container::default();
    let mut renderer = ProjectRenderer::new(StandardCard::default());

    let report = renderer.run(&NotFoundSource, &mut container).await;

    assert!(!report.failed());
    assert_eq!(renderer.state(), &RenderState::Rendered);
    assert!(container.inner_html().contains(EMPTY_MESSAGE));
}
