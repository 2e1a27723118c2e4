use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use wattway_config::WattwayConfig;
use wattway_motion::driver::{Entrance, FrameClock, FrameDriver, InstanceId, StyleFrame};
use wattway_motion::interaction::InteractionEvent;
use wattway_motion::style::{ControlKind, LoaderKind, LogoKind, Size, VariantConfig};
use wattway_motion::theme::ThemeTokens;

/// Scripted input: at `at_ms`, send `event` to the instance in slot `target`.
struct Cue {
    at_ms: u64,
    target: usize,
    event: InteractionEvent,
}

const BUTTON: usize = 0;
const INPUT: usize = 1;
const LOADER: usize = 2;

fn timeline() -> Vec<Cue> {
    let cue = |at_ms, target, event| Cue { at_ms, target, event };
    vec![
        cue(100, BUTTON, InteractionEvent::PointerDown),
        cue(250, BUTTON, InteractionEvent::PointerUp),
        cue(300, INPUT, InteractionEvent::FocusGained),
        cue(500, INPUT, InteractionEvent::SetFilled(true)),
        cue(700, INPUT, InteractionEvent::SetError(Some("invalid address".into()))),
        cue(900, BUTTON, InteractionEvent::SetLoading(true)),
        cue(1100, INPUT, InteractionEvent::SetError(None)),
        cue(1200, INPUT, InteractionEvent::FocusLost),
        cue(1400, LOADER, InteractionEvent::SetDisabled(true)),
        cue(1600, BUTTON, InteractionEvent::SetLoading(false)),
    ]
}

fn log_frame(frame: &StyleFrame) {
    let values: Vec<String> = frame
        .values
        .iter()
        .map(|(property, value)| match value.as_color() {
            Some(color) => format!("{property}={}", color.to_hex()),
            None => format!("{property}={:.3}", value.as_scalar().unwrap_or_default()),
        })
        .collect();
    log::info!(
        "{} [{}]{} {}",
        frame.id,
        frame.state,
        if frame.settled { " settled" } else { "" },
        values.join(" ")
    );
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let config = WattwayConfig::load().context("loading configuration")?;
    let theme = match &config.theme.path {
        Some(path) => ThemeTokens::load_from_file(path)
            .with_context(|| format!("loading theme {}", path.display()))?,
        None => ThemeTokens::default(),
    };

    let mut driver = FrameDriver::new(Arc::new(theme), &config.animation);
    let slots: Vec<InstanceId> = vec![
        driver.mount_with_entrance(
            VariantConfig::button(ControlKind::Primary, Size::Medium),
            Entrance::fade_in_up().staggered(0.0, 80.0, 0),
        )?,
        driver.mount_with_entrance(
            VariantConfig::input(ControlKind::Outline, Size::Medium),
            Entrance::fade_in_up().staggered(0.0, 80.0, 1),
        )?,
        driver.mount(VariantConfig::loader(LoaderKind::Pulse, Size::Small))?,
        driver.mount_with_entrance(VariantConfig::logo(LogoKind::Glow), Entrance::pop())?,
    ];
    log::info!("mounted {} components", driver.len());

    let mut cues = timeline().into_iter().peekable();
    let mut clock = FrameClock::from_config(&config.animation);
    let frame_ms = (config.animation.frame_dt() * 1000.0).round().max(1.0) as u64;
    let total_ms = (config.demo.seconds.max(0.0) * 1000.0) as u64;
    let mut published = 0usize;

    let mut now_ms = 0;
    while now_ms <= total_ms {
        while let Some(cue) = cues.next_if(|cue| cue.at_ms <= now_ms) {
            let id = slots[cue.target];
            let state = driver.dispatch(id, cue.event.clone())?;
            log::info!("{now_ms} ms: {id} <- {:?} => {state}", cue.event);
        }

        let dt = clock.delta(Duration::from_millis(now_ms));
        let mut sink = |frame: &StyleFrame| {
            published += 1;
            log::debug!("{now_ms} ms");
            log_frame(frame);
        };
        driver.tick_and_publish(dt, &mut sink);
        now_ms += frame_ms;
    }

    for id in &slots {
        log_frame(&driver.frame(*id)?);
    }
    log::info!(
        "published {published} frames; {} still animating",
        if driver.needs_frame() { "some" } else { "none" }
    );
    Ok(())
}
