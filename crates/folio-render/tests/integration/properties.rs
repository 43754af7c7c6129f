//! Rendering properties over hand-built project lists.

use folio_core::{Project, SubEntry};
use folio_render::{
    CardTemplate, Container, Diagnostics, Element, Error, Field, ProjectRenderer, RenderState,
    Result, StandardCard,
};

use crate::common::{cards, project};

fn render(projects: &[Project]) -> (Container, folio_render::RenderReport) {
    let mut container = Container::default();
    let mut renderer = ProjectRenderer::new(StandardCard::default());
    let report = renderer.render(projects, &mut container);
    (container, report)
}

#[test]
fn test_one_card_per_project_in_order() {
    let projects: Vec<Project> = (0..12).map(|i| project(&format!("P{i}"))).collect();
    let (container, report) = render(&projects);

    assert_eq!(report.cards, 12);
    let titles: Vec<String> = cards(&container)
        .iter()
        .map(|c| c.find("h5").unwrap().text_content())
        .collect();
    let expected: Vec<String> = (0..12).map(|i| format!("P{i}")).collect();
    assert_eq!(titles, expected);
}

#[test]
fn test_each_omission_warns_exactly_once() {
    let complete = Project {
        title: Some("Complete".to_string()),
        img: Some("a.png".to_string()),
        link: Some("https://example.com".to_string()),
        github: Some("https://github.com/x/y".to_string()),
        sub_content: Some(vec![SubEntry {
            title: "Note".to_string(),
            description: "Text".to_string(),
            github: Some("https://github.com/x/z".to_string()),
        }]),
        ..Project::default()
    };

    let cases = [
        (Field::Image, Project { img: None, ..complete.clone() }),
        (Field::ProjectLink, Project { link: None, ..complete.clone() }),
        (Field::GithubLink, Project { github: None, ..complete.clone() }),
        (Field::SubContent, Project { sub_content: None, ..complete.clone() }),
    ];

    for (field, project) in cases {
        let (container, report) = render(std::slice::from_ref(&project));
        assert_eq!(report.cards, 1, "{field} omission should still render");
        assert_eq!(report.warnings.len(), 1, "{field} omission");
        assert_eq!(report.warnings[0].field, field);
        assert_eq!(
            report.warnings[0].to_string(),
            format!("Project \"Complete\" is missing a {field}.")
        );
        assert_eq!(cards(&container).len(), 1);
    }
}

#[test]
fn test_known_and_unknown_tag_badges() {
    let project = Project {
        tags: Some(vec!["HTML".to_string(), "Rust".to_string()]),
        ..project("Tagged")
    };
    let (container, _) = render(&[project]);

    let card = cards(&container)[0];
    let badges = card.find_all("span");
    assert_eq!(badges[0].get_attr("class"), Some("html me-1 mb-1"));
    assert_eq!(badges[1].get_attr("class"), Some("me-1 mb-1"));
    assert_eq!(badges[1].text_content(), "Rust");
}

#[test]
fn test_action_link_labels() {
    let demo = Project {
        link: Some("https://foo.github.io/bar".to_string()),
        ..project("Demo")
    };
    let plain = Project {
        link: Some("https://example.com".to_string()),
        ..project("Plain")
    };
    let (container, _) = render(&[demo, plain]);

    let labels: Vec<String> = cards(&container)
        .iter()
        .map(|c| c.find("a").unwrap().text_content())
        .collect();
    assert_eq!(labels, vec!["Live Demo", "Project Link"]);
}

struct Exploding;

impl CardTemplate for Exploding {
    fn build(&self, _project: &Project, _diagnostics: &mut Diagnostics) -> Result<Element> {
        Err(Error::template("template exploded"))
    }
}

#[test]
fn test_exception_produces_error_panel() {
    let mut container = Container::default();
    let mut renderer = ProjectRenderer::new(Exploding);

    let report = renderer.render(&[project("A")], &mut container);

    assert!(report.failed());
    assert_eq!(report.cards, 0);
    assert!(matches!(renderer.state(), RenderState::Failed(msg) if msg.contains("template exploded")));
    let html = container.inner_html();
    assert!(html.contains(r#"class="alert alert-danger" role="alert""#));
    assert!(html.contains("template exploded"));
}

#[test]
fn test_unsafe_url_produces_error_panel_after_good_cards() {
    let bad = Project {
        github: Some("javascript:alert(1)".to_string()),
        ..project("Bad")
    };
    let (container, report) = render(&[project("Good"), bad, project("Never")]);

    assert_eq!(report.cards, 1);
    assert_eq!(cards(&container).len(), 1);
    let html = container.inner_html();
    assert!(html.contains("javascript:alert(1)"));
    assert!(!html.contains("Never"));
    assert!(!html.contains(r#"href="javascript"#));
}

#[test]
fn test_tab_split_javascript_link_produces_error_panel() {
    let sneaky = Project {
        link: Some("java\tscript:alert(1)".to_string()),
        ..project("Sneaky")
    };
    let (container, report) = render(&[sneaky]);

    assert!(report.failed());
    assert_eq!(report.cards, 0);
    assert!(cards(&container).is_empty());
    assert!(!container.inner_html().contains("href="));
}
