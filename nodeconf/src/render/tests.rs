//! Unit tests for template rendering.

use rstest::{fixture, rstest};

use super::{FluentRenderer, RenderContext, SlotValue, Template, TemplateRenderer};
use crate::ConfigError;

#[fixture]
fn renderer() -> FluentRenderer {
    FluentRenderer::new()
}

const PROPERTIES: &str = "\
node-properties =
    nifi.cluster.is.node={ $is-node }
    nifi.node.id={ $node-id }
    nifi.web.proxy.host={ $web-proxy-host }
    nifi.cluster.protocol.is.secure={ $cluster-secure ->
        [true] true
       *[other] false
    }
    nifi.ui.banner.text=default
";

fn properties() -> Template {
    Template::new("node.properties", PROPERTIES)
}

fn context() -> RenderContext {
    RenderContext::new()
        .with("is-node", true)
        .with("node.id", 3_i32)
        .with("web-proxy-host", "proxy.example")
        .with("cluster-secure", false)
}

#[rstest]
fn renders_multiline_documents(renderer: FluentRenderer) {
    let rendered = renderer.render(&properties(), &context());
    assert!(rendered.is_ok(), "unexpected error: {:?}", rendered.error);
    assert_eq!(
        rendered.text,
        "nifi.cluster.is.node=true\n\
         nifi.node.id=3\n\
         nifi.web.proxy.host=proxy.example\n\
         nifi.cluster.protocol.is.secure=false\n\
         nifi.ui.banner.text=default"
    );
}

#[rstest]
fn flags_select_conditional_blocks(renderer: FluentRenderer) {
    let rendered = renderer.render(&properties(), &context().with("cluster-secure", true));
    assert!(rendered.text.contains("nifi.cluster.protocol.is.secure=true"));
}

#[rstest]
fn absent_optional_slots_render_empty(renderer: FluentRenderer) {
    let ctx = context().with_optional::<String>("web-proxy-host", None);
    let rendered = renderer.render(&properties(), &ctx);
    assert!(rendered.is_ok());
    assert!(rendered.text.contains("nifi.web.proxy.host=\n"));
}

#[rstest]
fn missing_message_renders_nothing(renderer: FluentRenderer) {
    let rendered = renderer.render(&Template::new("absent", PROPERTIES), &context());
    assert_eq!(rendered.text, "");
    assert!(matches!(
        rendered.error,
        Some(ConfigError::MissingTemplate { ref template }) if template == "absent"
    ));
}

#[rstest]
fn parse_errors_keep_valid_messages(renderer: FluentRenderer) {
    let source = "ok =\n    a=1\nbroken = { $unterminated\n";
    let rendered = renderer.render(&Template::new("ok", source), &RenderContext::new());
    assert_eq!(rendered.text, "a=1");
    assert!(matches!(rendered.error, Some(ConfigError::TemplateParse { .. })));
}

#[rstest]
fn unresolved_slots_keep_partial_text(renderer: FluentRenderer) {
    let source = "partial =\n    a=1\n    b={ $missing }\n";
    let rendered = renderer.render(&Template::new("partial", source), &RenderContext::new());
    assert!(rendered.text.starts_with("a=1\nb="), "got {:?}", rendered.text);
    assert!(matches!(rendered.error, Some(ConfigError::TemplateResolve { .. })));
}

#[rstest]
fn unparsable_template_reports_every_failure(renderer: FluentRenderer) {
    let rendered = renderer.render(&Template::new("gone", "gone = { $x"), &RenderContext::new());
    assert_eq!(rendered.text, "");
    let Some(ConfigError::Aggregate(aggregate)) = rendered.error else {
        panic!("expected parse and lookup failures");
    };
    assert_eq!(aggregate.len(), 2);
}

#[test]
fn context_normalises_slot_names() {
    let ctx = RenderContext::new().with("zookeeper.path", "/nifi");
    assert_eq!(ctx.get("zookeeper-path"), Some(&SlotValue::Text("/nifi".into())));
    assert_eq!(ctx.get("zookeeper.path"), ctx.get("zookeeper-path"));
    assert_eq!(ctx.len(), 1);
}

#[rstest]
#[case(SlotValue::Flag(true), "true")]
#[case(SlotValue::Number(-4), "-4")]
#[case(SlotValue::Text("x".into()), "x")]
fn slot_values_display(#[case] value: SlotValue, #[case] expected: &str) {
    assert_eq!(value.to_string(), expected);
}

fn numbered_template(lines: usize) -> (Template, RenderContext) {
    let mut source = String::from("big =\n");
    let mut ctx = RenderContext::new();
    for i in 0..lines {
        source.push_str(&format!("    k{i}={{ $v{i} }}\n"));
        ctx = ctx.with(&format!("v{i}"), format!("value-{i}"));
    }
    (Template::new("big", source), ctx)
}

#[rstest]
#[case(100)]
#[case(101)]
#[case(120)]
#[case(350)]
fn renders_every_slot_of_large_templates(renderer: FluentRenderer, #[case] lines: usize) {
    let (template, ctx) = numbered_template(lines);
    let rendered = renderer.render(&template, &ctx);
    assert!(rendered.is_ok(), "unexpected error: {:?}", rendered.error);
    let expected: Vec<String> = (0..lines).map(|i| format!("k{i}=value-{i}")).collect();
    assert_eq!(rendered.text, expected.join("\n"));
}

#[rstest]
fn large_templates_keep_conditional_blocks(renderer: FluentRenderer) {
    let mut source = String::from("flags =\n");
    let mut ctx = RenderContext::new();
    for i in 0..150 {
        source.push_str(&format!(
            "    f{i}={{ $on{i} ->\n        [true] {{ $name{i} }}\n       *[other] off\n    }}\n"
        ));
        ctx = ctx.with(&format!("on{i}"), i % 2 == 0).with(&format!("name{i}"), format!("n{i}"));
    }
    let rendered = renderer.render(&Template::new("flags", source), &ctx);
    assert!(rendered.is_ok(), "unexpected error: {:?}", rendered.error);
    assert_eq!(rendered.text.lines().count(), 150);
    assert!(rendered.text.contains("f148=n148"));
    assert!(rendered.text.ends_with("f149=off"));
}
