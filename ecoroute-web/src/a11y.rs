// Accessibility helpers

/// Get CSS for visible focus indicators and screen reader utilities
///
/// Returns critical accessibility CSS that should be injected early in the page load.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #03C75A;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Update the live region status for screen readers
///
/// Writes into the `#app-status` element if present.
pub fn set_status(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(node) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id("app-status"))
    {
        node.set_text_content(Some(msg));
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

/// Status line announced when `screen` becomes active.
#[must_use]
pub fn screen_announcement(
    screen: ecoroute_core::Screen,
    reward: Option<&ecoroute_core::RewardSummary>,
) -> String {
    use ecoroute_core::Screen;
    match screen {
        Screen::Summary => {
            let points = reward.map_or(0, |r| r.total).to_string();
            let mut args = std::collections::BTreeMap::new();
            args.insert("points", points.as_str());
            args.insert("count", points.as_str());
            crate::i18n::tr("status.summary", Some(&args))
        }
        other => crate::i18n::t(&format!("status.{}", other.as_str())),
    }
}
