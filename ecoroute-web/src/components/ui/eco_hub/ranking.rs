use crate::game::{Leaderboard, Podium, RegionBattle};
use crate::i18n::fmt_points;
use std::collections::BTreeMap;
use yew::prelude::*;

fn gap_line(battle: &RegionBattle) -> String {
    let gap = fmt_points(battle.gap);
    let count = battle.gap.to_string();
    let mut m = BTreeMap::new();
    m.insert("gap", gap.as_str());
    m.insert("count", count.as_str());
    crate::i18n::tr("hub.battle.gap", Some(&m))
}

fn render_battle(battle: Option<RegionBattle>) -> Html {
    let Some(battle) = battle else {
        return html! { <p class="battle-none muted">{ crate::i18n::t("hub.battle.none") }</p> };
    };
    html! {
      <div class="region-battle">
        <div class="battle-side leader">
          <span class="battle-tag">{ crate::i18n::t("hub.battle.leader") }</span>
          <strong>{ battle.leader.region.clone() }</strong>
          <span class="battle-points">{ fmt_points(battle.leader.points) }</span>
        </div>
        <span class="battle-vs" aria-hidden="true">{ crate::i18n::t("hub.battle.vs") }</span>
        <div class="battle-side runner-up">
          <strong>{ battle.runner_up.region.clone() }</strong>
          <span class="battle-gap">{ gap_line(&battle) }</span>
        </div>
      </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct RankingTabProps {
    pub leaderboard: Leaderboard,
}

#[function_component(RankingTab)]
pub fn ranking_tab(props: &RankingTabProps) -> Html {
    let pts = |points: u64| {
        let value = fmt_points(points);
        let mut m = BTreeMap::new();
        m.insert("points", value.as_str());
        crate::i18n::tr("hub.pts", Some(&m))
    };
    html! {
      <div class="hub-ranking">
        <section class="battle-card" aria-labelledby="battle-title">
          <h3 id="battle-title">{ crate::i18n::t("hub.battle.title") }</h3>
          { render_battle(props.leaderboard.region_battle()) }
        </section>
        <section aria-labelledby="weekly-title">
          <h3 id="weekly-title">{ crate::i18n::t("hub.weekly_best") }</h3>
          <ol class="leaderboard">
            { for props.leaderboard.iter().map(|entry| html! {
                <li class={classes!("leaderboard-row", Podium::for_rank(entry.rank).css_class())}>
                  <span class="rank">{ entry.rank }</span>
                  <span class="driver">
                    <strong>{ entry.name.clone() }</strong>
                    <span class="muted">{ entry.region.clone() }</span>
                  </span>
                  <span class="points">{ pts(entry.points) }</span>
                </li>
            }) }
          </ol>
        </section>
      </div>
    }
}
