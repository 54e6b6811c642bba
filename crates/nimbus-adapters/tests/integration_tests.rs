//! Integration tests: view manager over the real Mustache adapters.

use std::{fs, sync::Arc};

use nimbus_adapters::{MockConnection, MustacheEngine, MustacheRenderer, RecordingRenderer};
use nimbus_core::prelude::*;
use serde_json::json;
use tempfile::TempDir;

fn views() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("partials")).unwrap();
    fs::write(
        root.join("layout.mustache"),
        "{{> header}}<main>{{title}}</main>{{> footer}}",
    )
    .unwrap();
    fs::write(
        root.join("partials/header.mustache"),
        "<a href=\"{{{base_url}}}\">{{app_name}}</a>",
    )
    .unwrap();
    fs::write(
        root.join("partials/footer.mustache"),
        "<footer>&copy; {{year}} {{app_name}}</footer>",
    )
    .unwrap();
    temp
}

fn tpl(name: &str) -> TemplateRef {
    TemplateRef::new(name).unwrap()
}

#[test]
fn globals_reach_templates_and_partials() {
    let dir = views();
    let vm = ViewManager::with_year(
        MustacheRenderer::new(dir.path()),
        &ViewConfig::new().app_name("Demo").base_url("/demo/"),
        2026,
    );

    let body = vm
        .render(&tpl("layout"), &RenderData::new().with("title", "Welcome"))
        .unwrap();

    assert_eq!(
        body,
        "<a href=\"/demo/\">Demo</a><main>Welcome</main><footer>&copy; 2026 Demo</footer>"
    );
}

#[test]
fn call_data_overrides_globals_in_output() {
    let dir = views();
    let vm = ViewManager::with_year(MustacheEngine::new(dir.path()), &ViewConfig::default(), 2026);

    let body = vm
        .render(
            &tpl("layout.mustache"),
            &RenderData::new().with("title", "Hi").with("app_name", "Page"),
        )
        .unwrap();

    assert!(body.contains(">Page</a>"));
    assert!(body.contains("2026 Page"));
}

#[test]
fn add_global_then_render_exposes_value() {
    let dir = views();
    fs::write(dir.path().join("theme.mustache"), "theme={{theme}}").unwrap();
    let vm = ViewManager::with_year(MustacheEngine::new(dir.path()), &ViewConfig::default(), 2026);

    vm.add_global("theme", "dark").unwrap();

    assert_eq!(
        vm.render(&tpl("theme"), &RenderData::new()).unwrap(),
        "theme=dark"
    );
}

#[test]
fn view_manager_equals_engine_with_union() {
    let dir = views();
    let engine = Arc::new(MustacheEngine::new(dir.path()));
    let vm = ViewManager::from_shared(engine.clone(), &ViewConfig::default(), 2026);

    let data = RenderData::new().with("title", "Same");
    let via_manager = vm.render(&tpl("layout"), &data).unwrap();
    let direct = engine
        .render(&tpl("layout"), &vm.globals().unwrap().merge(&data))
        .unwrap();

    assert_eq!(via_manager, direct);
}

#[test]
fn missing_template_propagates_through_manager() {
    let dir = views();
    let vm = ViewManager::new(MustacheRenderer::new(dir.path()), &ViewConfig::default());

    let err = vm.render(&tpl("missing"), &RenderData::new()).unwrap_err();

    assert!(err.is_not_found());
}

#[test]
fn scenario_engine_receives_seeded_globals() {
    let recorder = RecordingRenderer::new().with_response("ok");
    let vm = ViewManager::new(recorder.clone(), &ViewConfig::new().app_name("Demo"));

    vm.render(&tpl("about"), &RenderData::new().with("getVar", json!({})))
        .unwrap();

    let call = recorder.last_call().unwrap();
    assert_eq!(call.template.as_str(), "about");
    assert_eq!(call.data.get("app_name"), Some(&json!("Demo")));
    assert_eq!(call.data.get("base_url"), Some(&json!("/")));
    assert!(call.data.get("year").and_then(|y| y.as_i64()).is_some());
    assert_eq!(call.data.get("getVar"), Some(&json!({})));
    assert_eq!(call.data.len(), 4);
}

#[test]
fn swapping_engine_at_runtime() {
    let dir = views();
    let recorder = RecordingRenderer::new().with_response("recorded");
    let vm = ViewManager::with_year(recorder.clone(), &ViewConfig::default(), 2026);

    assert_eq!(
        vm.render(&tpl("layout"), &RenderData::new()).unwrap(),
        "recorded"
    );

    vm.set_engine(MustacheRenderer::new(dir.path())).unwrap();

    assert!(
        vm.render(&tpl("layout"), &RenderData::new())
            .unwrap()
            .contains("<main></main>")
    );
    assert_eq!(recorder.calls().len(), 1);
}

#[test]
fn controllers_render_through_app_context() {
    let dir = views();
    let db = MockConnection::new();
    let vm = ViewManager::with_year(MustacheEngine::new(dir.path()), &ViewConfig::default(), 2026);
    let ctx = AppContext::new(Arc::new(vm), Arc::new(db.clone()));

    // what a controller action does: query, then render
    let users = ctx.db().query("SELECT * FROM users").unwrap().fetch_all().unwrap();
    let body = ctx
        .render(
            "layout",
            &RenderData::new().with("title", format!("{} users", users.len())),
        )
        .unwrap();

    assert!(body.contains("<main>0 users</main>"));
    assert_eq!(db.issued(), vec!["SELECT * FROM users"]);
}
