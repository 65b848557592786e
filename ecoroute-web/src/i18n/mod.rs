mod bundle;
mod format;
mod locales;
mod render;

pub use bundle::{DEFAULT_LANG, I18nBundle, STORAGE_KEY, current_lang, set_lang};
pub use format::{fmt_krw, fmt_number, fmt_points};
pub use locales::{LocaleMeta, locales};
pub use render::{t, t_or, tr};
