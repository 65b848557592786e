use super::drive::DriveCtx;
use anyhow::{Context, Result, ensure};
use ecoroute_core::{
    HubTab, Overlay, RewardStatus, RouteKind, Screen, SessionError, SessionEvent, preview_total,
};

/// Setup through summary on the eco route; returns the points earned.
pub async fn smoke(ctx: &mut DriveCtx<'_>) -> Result<u64> {
    ctx.select_vehicle()?;
    ctx.accept(SessionEvent::ConfirmVehicle)?;
    ctx.expect_screen(Screen::Idle)?;
    ctx.await_screen(Screen::Planning).await?;
    ctx.pick_route(RouteKind::Eco)?;
    ctx.expect_screen(Screen::Navigating)?;
    ctx.await_screen(Screen::Summary).await?;

    let summary = ctx
        .session()
        .reward_summary()
        .context("summary without a reward")?;
    let route = ctx.session().route().context("summary without a route")?;
    let expected = preview_total(route, ctx.vehicle().multiplier);
    ensure!(
        summary.total == expected,
        "reward {} differs from preview {expected}",
        summary.total
    );
    ensure!(summary.earned(), "eco route earned nothing");
    Ok(summary.total)
}

/// A second drive after restart takes the fastest route and earns nothing.
pub async fn restart(ctx: &mut DriveCtx<'_>) -> Result<u64> {
    smoke(ctx).await?;
    ctx.accept(SessionEvent::Restart)?;
    ctx.expect_screen(Screen::Idle)?;
    ensure!(ctx.session().route().is_none(), "restart kept the old route");
    ctx.await_screen(Screen::Planning).await?;
    ctx.pick_route(RouteKind::Fastest)?;
    ctx.await_screen(Screen::Summary).await?;
    let summary = ctx
        .session()
        .reward_summary()
        .context("summary without a reward")?;
    ensure!(
        summary.total == 0 && summary.status == RewardStatus::NoIncentive,
        "fastest route earned {}",
        summary.total
    );
    Ok(summary.total)
}

/// Out-of-order events are rejected and leave the screen alone.
pub async fn guard(ctx: &mut DriveCtx<'_>) -> Result<u64> {
    ctx.reject(
        SessionEvent::ConfirmVehicle,
        SessionError::NoVehicleSelected,
    )?;
    let route = ctx.route_event(RouteKind::Eco)?;
    ctx.reject(
        route,
        SessionError::WrongScreen {
            event: "select_route",
            screen: Screen::Setup,
        },
    )?;
    ctx.reject(
        SessionEvent::Restart,
        SessionError::WrongScreen {
            event: "restart",
            screen: Screen::Setup,
        },
    )?;
    ctx.reject(
        SessionEvent::ShowHub,
        SessionError::WrongScreen {
            event: "show_hub",
            screen: Screen::Setup,
        },
    )?;
    ctx.expect_screen(Screen::Setup)?;

    ctx.select_vehicle()?;
    ctx.accept(SessionEvent::ConfirmVehicle)?;
    ctx.accept(SessionEvent::ShowHub)?;
    ctx.reject(SessionEvent::OpenPlanning, SessionError::HubOpen)?;
    ctx.accept(SessionEvent::HideHub)?;
    ctx.reject(
        SessionEvent::SelectHubTab(HubTab::Certificate),
        SessionError::HubClosed,
    )?;
    ctx.accept(SessionEvent::OpenPlanning)?;
    ctx.expect_screen(Screen::Planning)?;
    Ok(0)
}

/// Manual planning overtakes the confirm timer, which must then be ignored.
pub async fn stale_timer(ctx: &mut DriveCtx<'_>) -> Result<u64> {
    ctx.select_vehicle()?;
    ctx.accept(SessionEvent::ConfirmVehicle)?;
    ctx.accept(SessionEvent::OpenPlanning)?;
    ctx.pick_route(RouteKind::Eco)?;
    ctx.await_screen(Screen::Summary).await?;
    let late = ctx.drain_timers().await?;
    ensure!(late == 0, "{late} late timer(s) moved the session");
    ctx.expect_screen(Screen::Summary)?;
    ensure!(
        ctx.stale_tokens() >= 1,
        "the superseded confirm timer never arrived"
    );
    Ok(ctx
        .session()
        .reward_summary()
        .map_or(0, |summary| summary.total))
}

/// The Eco-Hub survives the idle timer and its tabs never move the screen.
pub async fn hub(ctx: &mut DriveCtx<'_>) -> Result<u64> {
    ctx.select_vehicle()?;
    ctx.accept(SessionEvent::ConfirmVehicle)?;
    ctx.accept(SessionEvent::ShowHub)?;
    ctx.accept(SessionEvent::SelectHubTab(HubTab::Certificate))?;
    ctx.expect_screen(Screen::Idle)?;
    ctx.await_screen(Screen::Planning).await?;
    ensure!(
        ctx.session().overlay() == Overlay::EcoHub(HubTab::Certificate),
        "hub closed by the planning timer"
    );
    let route = ctx.route_event(RouteKind::Eco)?;
    ctx.reject(route, SessionError::HubOpen)?;
    ctx.accept(SessionEvent::HideHub)?;
    ensure!(!ctx.session().overlay().is_open(), "hub still open");
    Ok(0)
}
