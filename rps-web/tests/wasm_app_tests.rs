#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use yew::Renderer;

use rps_web::app::App;
use rps_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

#[wasm_bindgen_test]
fn app_renders_three_enabled_choices_and_zero_scores() {
    Renderer::<App>::with_root(ensure_app_root()).render();
    let doc = dom::document();
    let buttons = doc
        .query_selector_all("button.choice-btn")
        .expect("query choice buttons");
    assert_eq!(buttons.length(), 3);
    let player = doc
        .get_element_by_id("player-score")
        .expect("player score");
    assert_eq!(player.text_content().as_deref(), Some("0"));
    assert!(doc.get_element_by_id("result-section").is_none());
}
