use crate::game::{RewardCategory, RewardSummary};
use crate::i18n::fmt_points;
use std::collections::BTreeMap;
use yew::prelude::*;

fn step_title(category: RewardCategory) -> String {
    let n = category.step().to_string();
    let title = crate::i18n::t(&format!("reward.{}.title", category.key()));
    let mut m = BTreeMap::new();
    m.insert("n", n.as_str());
    m.insert("title", title.as_str());
    crate::i18n::tr("summary.step", Some(&m))
}

fn step_desc(category: RewardCategory, delay_minutes: u32) -> String {
    let minutes = delay_minutes.to_string();
    let mut m = BTreeMap::new();
    m.insert("minutes", minutes.as_str());
    crate::i18n::tr(&format!("reward.{}.desc", category.key()), Some(&m))
}

pub(super) fn pts(points: u64) -> String {
    let value = fmt_points(points);
    let mut m = BTreeMap::new();
    m.insert("points", value.as_str());
    crate::i18n::tr("summary.pts", Some(&m))
}

#[derive(Properties, PartialEq, Clone)]
pub struct RewardStepsProps {
    pub summary: RewardSummary,
    pub delay_minutes: u32,
}

#[function_component(RewardSteps)]
pub fn reward_steps(props: &RewardStepsProps) -> Html {
    html! {
      <section class="reward-steps" aria-labelledby="breakdown-title">
        <h3 id="breakdown-title">{ crate::i18n::t("summary.breakdown_title") }</h3>
        <ol>
          { for props.summary.steps().into_iter().map(|(category, points)| html! {
              <li class={classes!("reward-step", format!("step-{}", category.key()))}>
                <div>
                  <span class="step-title">{ step_title(category) }</span>
                  <p class="muted">{ step_desc(category, props.delay_minutes) }</p>
                </div>
                <span class="step-points">{ pts(u64::from(points)) }</span>
              </li>
          }) }
        </ol>
        <p class="reward-base">
          <span>{ crate::i18n::t("summary.base_total") }</span>
          <strong>{ pts(props.summary.base_total) }</strong>
        </p>
      </section>
    }
}
