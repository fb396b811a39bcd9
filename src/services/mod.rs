// Shoptrail services
// Services provide the stateless widget machinery: price classification, markup assembly, page access, carousel config.

pub mod carousel;
pub mod host_page;
pub mod price_presenter;
pub mod render_engine;
