pub mod admin;
pub mod carousel;
pub mod content;
pub mod health;
pub mod weather;

use serde::Deserialize;
use toraja_model::Locale;

/// `?lang=id|en` accepted by every public endpoint.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct LangQuery {
    pub lang: Option<Locale>,
}
