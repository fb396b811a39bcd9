//! shoptrail — a recently-viewed products widget for storefronts.
//!
//! Entry point: runs a console demo walking through every component with
//! an in-memory page and store.

fn main() {
    env_logger::init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║               shoptrail v{} — Demo Mode                   ║", env!("CARGO_PKG_VERSION"));
    println!("║     Recently-viewed products widget for storefronts        ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_storage();
    demo_recency_manager();
    demo_price_presenter();
    demo_render_engine();
    demo_carousel();
    demo_widget();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All 6 components demonstrated successfully!");
    println!("  shoptrail is ready for host-page integration.");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn sample(id: i64, title: &str, price: f64) -> shoptrail::types::product::ProductRecord {
    let mut record = shoptrail::types::product::ProductRecord::new(
        id,
        &format!("/products/{}", id),
        title,
        &format!("https://cdn.example.com/{}.jpg", id),
    );
    record.price = Some(price.into());
    record
}

fn demo_storage() {
    use shoptrail::storage::{SlotStore, SqliteSlotStore};
    section("Slot Storage (SQLite)");

    let store = SqliteSlotStore::open_in_memory().expect("Failed to open store");
    let tables: Vec<String> = {
        let conn = store.connection();
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect()
    };
    println!("  Created {} tables: {}", tables.len(), tables.join(", "));

    store.write_slot("demo", "[1,2,3]").unwrap();
    println!("  Wrote slot 'demo': {:?}", store.read_slot("demo").unwrap());

    store.write_slot("demo", "[4,5]").unwrap();
    println!("  Overwrote slot 'demo': {:?}", store.read_slot("demo").unwrap());

    store.remove_slot("demo").unwrap();
    println!("  Removed slot 'demo': {:?}", store.read_slot("demo").unwrap());
    println!("  ✓ SqliteSlotStore + migrations OK");
    println!();
}

fn demo_recency_manager() {
    use shoptrail::managers::recency_manager::{
        excluding_product, RecencyManager, RecencyManagerTrait,
    };
    use shoptrail::storage::MemorySlotStore;
    use shoptrail::types::product::ProductId;
    section("Recency Manager");

    let store = MemorySlotStore::new();
    let mut mgr = RecencyManager::new(&store, "recentlyViewedProducts", 3);

    mgr.record_view(&sample(1, "Alpha Jacket", 89.0)).unwrap();
    mgr.record_view(&sample(2, "Beta Boots", 129.0)).unwrap();
    mgr.record_view(&sample(3, "Gamma Scarf", 25.0)).unwrap();
    println!("  Recorded 3 views, list = {:?}",
        mgr.load().iter().map(|r| r.title.clone()).collect::<Vec<_>>());

    mgr.record_view(&sample(1, "Alpha Jacket", 89.0)).unwrap();
    println!("  Re-viewed product 1 (moves to front, no duplicate): {:?}",
        mgr.load().iter().map(|r| r.id.to_string()).collect::<Vec<_>>());

    mgr.record_view(&sample(4, "Delta Hat", 35.0)).unwrap();
    println!("  Recorded 4th view with max 3 (oldest evicted): {:?}",
        mgr.load().iter().map(|r| r.id.to_string()).collect::<Vec<_>>());

    let filtered = excluding_product(&mgr.load(), &ProductId::from(4));
    println!("  Excluding current product 4: {:?}",
        filtered.iter().map(|r| r.id.to_string()).collect::<Vec<_>>());

    mgr.clear().unwrap();
    println!("  Cleared: len = {}", mgr.len());
    println!("  ✓ RecencyManager OK");
    println!();
}

fn demo_price_presenter() {
    use shoptrail::services::price_presenter::{classify, normalize};
    section("Price Presenter");

    println!("  normalize(\"$1,234.56\") = {:?}", normalize(Some(&"$1,234.56".into())));
    println!("  normalize(\"EUR 99\") = {:?}", normalize(Some(&"EUR 99".into())));
    println!("  normalize(\"call us\") = {:?}", normalize(Some(&"call us".into())));

    let mut record = sample(1, "Alpha Jacket", 10.0);
    println!("  price=10 -> {:?}", classify(&record));

    record.compare_at_price = Some(15.0.into());
    println!("  price=10, compare_at=15 -> {:?}", classify(&record));

    record.compare_at_price = None;
    record.price_min = Some(10.0.into());
    record.price_max = Some(20.0.into());
    println!("  min=10, max=20 -> {:?}", classify(&record));

    record.compare_at_price_min = Some(15.0.into());
    record.compare_at_price_max = Some(25.0.into());
    println!("  min=10, max=20, cmin=15, cmax=25 -> {:?}", classify(&record));
    println!("  ✓ PricePresenter OK");
    println!();
}

fn demo_render_engine() {
    use shoptrail::services::render_engine::{RenderEngine, RenderEngineTrait};
    section("Render Engine");

    let engine = RenderEngine::new();
    let mut record = sample(7, "Quote \"Deluxe\" <Edition>", 49.0);
    record.compare_at_price = Some(59.0.into());

    let card = engine.render_card(&record);
    println!("  Card markup: {} bytes", card.len());
    println!("  Title escaped: {}", card.contains("Quote &quot;Deluxe&quot; &lt;Edition&gt;"));
    println!("  Sale modifier present: {}", card.contains("price--on-sale"));

    let grid = engine.render_grid(&[sample(1, "Alpha", 10.0), sample(2, "Beta", 20.0)]);
    println!("  Grid with 2 cards: {} bytes", grid.len());
    println!("  ✓ RenderEngine OK");
    println!();
}

fn demo_carousel() {
    use shoptrail::services::carousel::CarouselOptions;
    section("Carousel Config");

    let options = CarouselOptions::from_attributes(Some("5"), Some("2"));
    println!("  Parsed attributes: desktop={}, mobile={}", options.slides_desktop, options.slides_mobile);

    for width in [320, 600, 900, 1280] {
        println!("  width {} -> {} slides", width, options.slides_for_width(width));
    }

    let config = options.init_config();
    println!("  Init blob: {}", config);

    let fallback = CarouselOptions::from_attributes(None, Some("nope"));
    println!("  Fallback on bad attributes: desktop={}, mobile={}", fallback.slides_desktop, fallback.slides_mobile);
    println!("  ✓ CarouselOptions OK");
    println!();
}

fn demo_widget() {
    use shoptrail::app::Widget;
    use shoptrail::services::host_page::MemoryPage;
    use shoptrail::storage::MemorySlotStore;
    use shoptrail::types::config::WidgetConfig;
    section("Widget (full page-load lifecycle)");

    let store = MemorySlotStore::new();
    let mut page = MemoryPage::new();
    page.add_container("recently-viewed-products-grid");
    page.add_container("recently-viewed-empty");
    page.add_container("recently-viewed-section");

    // First visit: a product page, nothing viewed before
    let config = WidgetConfig {
        section_container: Some("recently-viewed-section".to_string()),
        current_product: Some(sample(1, "Alpha Jacket", 89.0)),
        ..WidgetConfig::default()
    };
    let mut widget = Widget::new(config, &store);
    let outcome = widget.refresh(&mut page);
    println!("  First product page: recorded={}, rendered={} (own product excluded)",
        outcome.recorded, outcome.rendered);
    println!("  Section visible: {:?}", page.is_visible("recently-viewed-section"));

    // Second visit: another product page
    let config = WidgetConfig {
        section_container: Some("recently-viewed-section".to_string()),
        current_product: Some(sample(2, "Beta Boots", 129.0)),
        ..WidgetConfig::default()
    };
    let mut widget = Widget::new(config, &store);
    let outcome = widget.refresh(&mut page);
    println!("  Second product page: recorded={}, rendered={}", outcome.recorded, outcome.rendered);
    println!("  Grid filled: {} bytes", page.content("recently-viewed-products-grid").map(|c| c.len()).unwrap_or(0));

    // Non-product page shows both
    let config = WidgetConfig {
        section_container: Some("recently-viewed-section".to_string()),
        ..WidgetConfig::default()
    };
    let mut widget = Widget::new(config, &store);
    let outcome = widget.refresh(&mut page);
    println!("  Landing page: rendered={} cards", outcome.rendered);

    widget.clear().unwrap();
    let outcome = widget.refresh(&mut page);
    println!("  After clear: rendered={}, empty message visible={:?}",
        outcome.rendered, page.is_visible("recently-viewed-empty"));
    println!("  ✓ Widget OK");
}
