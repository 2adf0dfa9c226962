//! Browser tests. Run with `wasm-pack test --headless --chrome crates/folio-client`.

#![cfg(target_arch = "wasm32")]

use folio_client::carousel::CarouselRow;
use folio_client::intro::Intro;
use folio_client::modal::Modal;
use folio_client::page::{self, Page};
use folio_client::ripple::RippleLayer;
use folio_client::{backgrounds, dom, nav};
use folio_core::{JumpDirection, ModalMode, PageConfig};
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, Event, HtmlCanvasElement, HtmlElement, HtmlMediaElement, MouseEvent,
    MouseEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE_ID: &str = "folio-fixture";

/// Replaces the previous fixture with `markup` and returns the document.
/// The rest of the body belongs to the test runner and is left alone.
fn fixture(markup: &str) -> Document {
    let document = dom::document().unwrap();
    if let Some(previous) = document.get_element_by_id(FIXTURE_ID) {
        previous.remove();
    }
    let root = document.create_element("div").unwrap();
    root.set_id(FIXTURE_ID);
    root.set_inner_html(markup);
    document.body().unwrap().append_child(&root).unwrap();
    document
}

fn first(document: &Document, selector: &str) -> Element {
    document.query_selector(selector).unwrap().unwrap()
}

fn first_html(document: &Document, selector: &str) -> HtmlElement {
    first(document, selector).dyn_into().unwrap()
}

fn mouse(kind: &str, client_x: i32) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_client_x(client_x);
    MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap()
}

fn click(target: &Element) -> bool {
    target.dispatch_event(&mouse("click", 0)).unwrap()
}

fn style_of(element: &HtmlElement, property: &str) -> String {
    element.style().get_property_value(property).unwrap()
}

const MODAL: &str = r#"
    <div id="mediaModal" aria-hidden="true">
        <div id="modalContent" style="position:fixed;left:0;top:0;width:200px;height:100px"></div>
        <a id="openExternal"></a>
        <button id="modalClose"></button>
    </div>
"#;

fn row_markup(label: &str) -> String {
    format!(
        r#"
        <div class="project-row">
            <span class="badge"> {label} </span>
            <div class="carousel-row" data-speed="1.5">
                <button class="carousel-btn prev"></button>
                <div class="carousel-track" style="display:flex;gap:10px">
                    <div class="card" data-large="a-large.jpg" style="flex:0 0 100px"><img src="a.jpg"></div>
                    <div class="card" style="flex:0 0 100px"><img src="b.jpg"></div>
                    <div class="card" data-large="c-large.jpg" style="flex:0 0 100px"></div>
                </div>
                <button class="carousel-btn next"></button>
            </div>
        </div>
        {MODAL}"#
    )
}

fn gallery_row() -> String {
    row_markup("포스터")
}

#[wasm_bindgen_test]
fn test_backgrounds_apply_data_bg() {
    let document = fixture(
        r#"<section id="hero" data-bg="img/hero.jpg"></section>
           <footer data-bg=""></footer>"#,
    );
    let applied = backgrounds::apply(&document, &PageConfig::default().selectors);
    assert_eq!(applied, 1);

    let hero = first_html(&document, "#hero");
    assert!(style_of(&hero, "background-image").contains("img/hero.jpg"));
}

#[wasm_bindgen_test]
fn test_carousel_duplicates_track_and_reads_descriptor() {
    let document = fixture(&gallery_row());
    let config = PageConfig::default();
    let rows = CarouselRow::mount_all(&document, &config, None);
    assert_eq!(rows.len(), 1);

    let cards = document.query_selector_all(".carousel-track .card").unwrap();
    assert_eq!(cards.length(), 6);

    let descriptor = rows[0].descriptor();
    assert_eq!(descriptor.mode, ModalMode::Gallery);
    assert_eq!(descriptor.speed, 1.5);
    assert_eq!(descriptor.urls.len(), 3);
    assert!(descriptor.urls[0].ends_with("a-large.jpg"));
    assert!(descriptor.urls[1].ends_with("b.jpg"));
}

#[wasm_bindgen_test]
fn test_carousel_jump_pauses_and_moves_three_slides() {
    let document = fixture(&gallery_row());
    let rows = CarouselRow::mount_all(&document, &PageConfig::default(), None);
    let row = &rows[0];

    row.jump(JumpDirection::Next);
    assert!(!row.is_running());
    assert_eq!(row.offset(), -330.0);
}

#[wasm_bindgen_test]
async fn test_carousel_settle_clears_transition_and_resumes() {
    let document = fixture(&gallery_row());
    let rows = CarouselRow::mount_all(&document, &PageConfig::default(), None);
    let row = &rows[0];
    let track = first_html(&document, ".carousel-track");

    click(&first(&document, ".carousel-btn.prev"));
    assert!(!row.is_running());
    assert_eq!(row.offset(), 330.0);
    assert!(!style_of(&track, "transition").is_empty());

    TimeoutFuture::new(650).await;

    assert!(row.is_running());
    assert_eq!(style_of(&track, "transition"), "");
    // Settling folds the offset back inside half the doubled track.
    let half = f64::from(track.scroll_width()) / 2.0;
    assert!(row.offset().abs() < half);
}

#[wasm_bindgen_test]
fn test_card_click_opens_modal_and_misses_are_ignored() {
    let document = fixture(&gallery_row());
    let config = PageConfig::default();
    let modal = Modal::mount(&document, &config).unwrap();
    let rows = CarouselRow::mount_all(&document, &config, Some(&modal));
    let descriptor = rows[0].descriptor().clone();

    // The track itself is not a card.
    click(&first(&document, ".carousel-track"));
    assert!(!modal.is_open());

    let thumbnails = document.query_selector_all(".carousel-track .card img").unwrap();
    let thumbnail: Element = thumbnails.get(1).unwrap().dyn_into().unwrap();
    click(&thumbnail);

    assert!(modal.is_open());
    let img = first(&document, "#modalContent img");
    assert_eq!(img.get_attribute("src"), Some(descriptor.urls[1].clone()));
}

#[wasm_bindgen_test]
fn test_modal_open_and_close() {
    let document = fixture(&gallery_row());
    let config = PageConfig::default();
    let modal = Modal::mount(&document, &config).unwrap();
    let rows = CarouselRow::mount_all(&document, &config, Some(&modal));
    let descriptor = rows[0].descriptor().clone();

    modal.open(&descriptor.urls[1], &descriptor).unwrap();
    assert!(modal.is_open());
    let root = first(&document, "#mediaModal");
    assert_eq!(root.get_attribute("aria-hidden").as_deref(), Some("false"));
    let img = first(&document, "#modalContent img");
    assert!(img.get_attribute("src").unwrap().ends_with("b.jpg"));

    // Gallery mode hides the external link.
    let external = first_html(&document, "#openExternal");
    assert_eq!(style_of(&external, "display"), "none");

    click(&first(&document, "#modalClose"));
    assert!(!modal.is_open());
    assert_eq!(root.get_attribute("aria-hidden").as_deref(), Some("true"));
    assert!(document.query_selector("#modalContent img").unwrap().is_none());
}

#[wasm_bindgen_test]
fn test_modal_backdrop_click_closes() {
    let document = fixture(&gallery_row());
    let config = PageConfig::default();
    let modal = Modal::mount(&document, &config).unwrap();
    let rows = CarouselRow::mount_all(&document, &config, Some(&modal));
    let descriptor = rows[0].descriptor().clone();
    modal.open(&descriptor.urls[0], &descriptor).unwrap();

    // Clicks inside the dialog bubble to the backdrop but do not close it.
    click(&first(&document, "#openExternal"));
    assert!(modal.is_open());

    click(&first(&document, "#mediaModal"));
    assert!(!modal.is_open());
}

#[wasm_bindgen_test]
fn test_gallery_content_click_cycles_by_half() {
    let document = fixture(&gallery_row());
    let config = PageConfig::default();
    let modal = Modal::mount(&document, &config).unwrap();
    let rows = CarouselRow::mount_all(&document, &config, Some(&modal));
    let urls = rows[0].descriptor().urls.clone();
    modal.open(&urls[0], rows[0].descriptor()).unwrap();

    let content = first(&document, "#modalContent");
    let shown = || first(&document, "#modalContent img").get_attribute("src");

    // The content area is 200px wide at the left edge.
    content.dispatch_event(&mouse("click", 150)).unwrap();
    assert_eq!(shown(), Some(urls[1].clone()));

    content.dispatch_event(&mouse("click", 20)).unwrap();
    assert_eq!(shown(), Some(urls[0].clone()));

    content.dispatch_event(&mouse("click", 20)).unwrap();
    assert_eq!(shown(), Some(urls[2].clone()));
}

#[wasm_bindgen_test]
fn test_link_mode_shows_external_control() {
    let document = fixture(&row_markup("웹"));
    let config = PageConfig::default();
    let modal = Modal::mount(&document, &config).unwrap();
    let rows = CarouselRow::mount_all(&document, &config, Some(&modal));
    let descriptor = rows[0].descriptor().clone();
    assert_eq!(descriptor.mode, ModalMode::Link);

    modal.open(&descriptor.urls[2], &descriptor).unwrap();

    let external = first_html(&document, "#openExternal");
    assert_eq!(style_of(&external, "display"), "block");
    assert_eq!(external.get_attribute("href"), Some(descriptor.urls[2].clone()));

    // Link mode ignores clicks on the image.
    first(&document, "#modalContent")
        .dispatch_event(&mouse("click", 150))
        .unwrap();
    let img = first(&document, "#modalContent img");
    assert_eq!(img.get_attribute("src"), Some(descriptor.urls[2].clone()));
}

const INTRO: &str = r#"
    <div id="intro" style="opacity:1">
        <video id="introVideo"></video>
        <button id="skipBtn">Skip</button>
    </div>
"#;

#[wasm_bindgen_test]
async fn test_intro_ended_fades_then_removes() {
    let document = fixture(INTRO);
    let _intro = Intro::mount(&document, &PageConfig::default()).unwrap();

    let video = first(&document, "#introVideo");
    video.dispatch_event(&Event::new("ended").unwrap()).unwrap();
    assert_eq!(style_of(&first_html(&document, "#intro"), "opacity"), "0");

    TimeoutFuture::new(650).await;
    assert!(document.get_element_by_id("intro").is_none());
}

#[wasm_bindgen_test]
fn test_intro_ended_fires_once() {
    let document = fixture(INTRO);
    let _intro = Intro::mount(&document, &PageConfig::default()).unwrap();
    let container = first_html(&document, "#intro");
    let video = first(&document, "#introVideo");

    video.dispatch_event(&Event::new("ended").unwrap()).unwrap();
    container.style().set_property("opacity", "1").unwrap();
    video.dispatch_event(&Event::new("ended").unwrap()).unwrap();

    assert_eq!(style_of(&container, "opacity"), "1");
}

#[wasm_bindgen_test]
fn test_intro_skip_pauses_and_hides() {
    let document = fixture(INTRO);
    let _intro = Intro::mount(&document, &PageConfig::default()).unwrap();

    click(&first(&document, "#skipBtn"));

    let video: HtmlMediaElement = first(&document, "#introVideo").dyn_into().unwrap();
    assert!(video.paused());
    assert_eq!(style_of(&first_html(&document, "#intro"), "opacity"), "0");
}

#[wasm_bindgen_test]
fn test_intro_skip_without_container_still_wired() {
    let document = fixture(r#"<video id="introVideo"></video><button id="skipBtn">Skip</button>"#);
    let intro = Intro::mount(&document, &PageConfig::default());
    assert!(intro.is_some());

    click(&first(&document, "#skipBtn"));
    let video: HtmlMediaElement = first(&document, "#introVideo").dyn_into().unwrap();
    assert!(video.paused());
}

#[wasm_bindgen_test]
async fn test_nav_links_scroll_to_their_section() {
    let document = fixture(
        r##"<a class="nav-link" href="#about">About</a>
            <a class="nav-link" href="#missing">Gone</a>
            <div style="height:4000px"></div>
            <section id="about">About</section>"##,
    );
    let _listeners = nav::bind(&document, &PageConfig::default().selectors);
    let window = dom::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, 0.0);

    let links = document.query_selector_all(".nav-link").unwrap();
    let link = |i: u32| -> Element { links.get(i).unwrap().dyn_into().unwrap() };

    // `dispatch_event` reports false once the default was prevented.
    assert!(!click(&link(1)));
    TimeoutFuture::new(100).await;
    assert_eq!(window.scroll_y().unwrap(), 0.0);

    assert!(!click(&link(0)));
    TimeoutFuture::new(1500).await;
    assert!(window.scroll_y().unwrap() > 0.0);

    window.scroll_to_with_x_and_y(0.0, 0.0);
}

#[wasm_bindgen_test]
fn test_ripple_layer_sizes_canvas_and_spawns() {
    let document = fixture(r#"<canvas id="rippleCanvas"></canvas>"#);
    let layer = RippleLayer::mount(&document, &PageConfig::default())
        .unwrap()
        .unwrap();
    let window = dom::window().unwrap();
    let (width, height) = dom::viewport_size(&window);
    let ratio = window.device_pixel_ratio();

    let size = layer.size();
    assert_eq!((size.css_width, size.css_height), (width, height));
    assert_eq!(f64::from(size.backing_width), (width * ratio).round());
    assert_eq!(f64::from(size.backing_height), (height * ratio).round());

    let canvas: HtmlCanvasElement = first(&document, "#rippleCanvas").dyn_into().unwrap();
    assert_eq!(canvas.width(), size.backing_width);
    assert_eq!(canvas.height(), size.backing_height);
    assert_eq!(style_of(&canvas, "width"), format!("{width}px"));
    assert_eq!(style_of(&canvas, "height"), format!("{height}px"));

    assert_eq!(layer.live_ripples(), 0);
    window.dispatch_event(&mouse("mousemove", 10)).unwrap();
    assert_eq!(layer.live_ripples(), 1);
    window.dispatch_event(&Event::new("wheel").unwrap()).unwrap();
    assert_eq!(layer.live_ripples(), 2);
}

#[wasm_bindgen_test]
fn test_page_mount_tolerates_empty_document() {
    let document = fixture("<p>nothing to see</p>");
    let page = Page::mount(&document, &PageConfig::default());
    assert!(page.intro.is_none());
    assert!(page.modal.is_none());
    assert!(page.carousels.is_empty());
    assert!(page.ripple.is_none());
    assert_eq!(page.backgrounds, 0);
    page::unmount();
}

#[wasm_bindgen_test]
fn test_mount_when_loaded_installs_immediately_after_load() {
    let document = fixture(r#"<section id="late" data-bg="img/late.jpg"></section>"#);
    assert_eq!(document.ready_state(), "complete");

    page::mount_when_loaded(PageConfig::default()).unwrap();

    let section = first_html(&document, "#late");
    assert!(style_of(&section, "background-image").contains("img/late.jpg"));
    page::unmount();
}
