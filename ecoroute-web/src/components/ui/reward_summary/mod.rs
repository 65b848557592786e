mod steps;

use crate::game::RewardSummary;
use crate::i18n::fmt_points;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RewardSummaryProps {
    pub summary: RewardSummary,
    /// Minutes the chosen route added over the fastest one.
    #[prop_or_default]
    pub delay_minutes: u32,
    pub on_home: Callback<()>,
}

/// Drive-complete card with the total and, when earned, the three-step breakdown.
#[function_component(RewardSummaryCard)]
pub fn reward_summary_card(p: &RewardSummaryProps) -> Html {
    let summary = p.summary;
    let multiplier_line = {
        let mult = summary.multiplier.label();
        let mut m = BTreeMap::new();
        m.insert("mult", mult.as_str());
        crate::i18n::tr("summary.multiplier_applied", Some(&m))
    };
    let on_home = {
        let cb = p.on_home.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
      <section class="panel reward-summary" aria-labelledby="summary-title">
        <h2 id="summary-title">{ crate::i18n::t("summary.title") }</h2>
        <div class="reward-total" aria-live="polite">
          <span class="reward-total-value">{ fmt_points(summary.total) }</span>
          <span class="reward-total-unit">{ crate::i18n::t("summary.points") }</span>
        </div>
        if summary.earned() {
            <p class="reward-mult">{ multiplier_line }</p>
            <steps::RewardSteps summary={summary} delay_minutes={p.delay_minutes} />
        } else {
            <p class="reward-none muted">{ crate::i18n::t("summary.no_incentive") }</p>
        }
        <button id="summary-home" class="primary-btn" onclick={on_home}>
          { crate::i18n::t("summary.home") }
        </button>
      </section>
    }
}
