use crate::game::Certificate;
use crate::i18n::fmt_krw;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CertificateTabProps {
    pub certificate: Certificate,
}

#[function_component(CertificateTab)]
pub fn certificate_tab(props: &CertificateTabProps) -> Html {
    let cert = &props.certificate;
    let top = {
        let pct = cert.top_percent.to_string();
        let mut m = BTreeMap::new();
        m.insert("pct", pct.as_str());
        crate::i18n::tr("hub.cert.top", Some(&m))
    };
    let co2 = {
        let kg = format!("{:.1}", cert.co2_reduction_kg);
        let mut m = BTreeMap::new();
        m.insert("kg", kg.as_str());
        crate::i18n::tr("hub.cert.co2_value", Some(&m))
    };
    html! {
      <article class={classes!("certificate-card", cert.tier.css_class())}>
        <span class="cert-tier">{ crate::i18n::t(cert.tier.i18n_key()) }</span>
        <h3 class="cert-title">{ cert.title.clone() }</h3>
        <p class="cert-top">{ top }</p>
        <dl class="cert-stats">
          <div>
            <dt>{ crate::i18n::t("hub.cert.savings") }</dt>
            <dd>{ fmt_krw(cert.total_savings_krw) }</dd>
          </div>
          <div>
            <dt>{ crate::i18n::t("hub.cert.co2") }</dt>
            <dd>{ co2 }</dd>
          </div>
        </dl>
        <p class="cert-verified muted">{ cert.verified_by.clone() }</p>
      </article>
    }
}
