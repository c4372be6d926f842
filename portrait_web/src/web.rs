use leptos::ev;
use leptos::prelude::*;
use portrait::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{console, HtmlAudioElement};

use crate::ui_model::splash_style;

mod dom;
mod timer;

use timer::Interval;

#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn start() {
    if let Err(e) = boot() {
        console::error_1(&format!("portrait: {e}").into());
    }
}

/// Wire the stage to the server-rendered page: the `<audio>` element named by
/// the config and the splash container.
fn boot() -> Result<(), String> {
    let document = dom::document()?;
    let config = dom::read_stage_config(&document)?;
    let stage = Stage::try_new(config).map_err(|e| e.to_string())?;

    let audio = dom::audio_element(&document, &stage.config().audio_id)?;
    let container = dom::query_html_element(&document, &stage.config().container_selector())?;

    dom::start_looping(&audio);

    leptos::mount::mount_to(container, move || splash_layer(stage, audio)).forget();
    Ok(())
}

/// Listens for clicks anywhere on the document and keeps at most one splash
/// in the container.
fn splash_layer(stage: Stage, audio: HtmlAudioElement) -> impl IntoView {
    let sprite = stage.config().sprite.clone();
    let class = stage.config().splash_class.clone();
    let size = stage.config().splash_size;
    let period_ms = stage.config().frame_period_ms;

    let stage = StoredValue::new(stage);
    let timer = StoredValue::new_local(None::<Interval>);

    let (splash, set_splash) = signal::<Option<SpawnedSplash>>(None);
    let (frame, set_frame) = signal::<Option<u32>>(None);

    let animate = move |id: SplashId| {
        let tick = move || {
            let mut step = FrameTick::Stale;
            stage.update_value(|s| step = s.tick(id));
            match step {
                FrameTick::Show(f) => {
                    set_frame.set(Some(f));
                    true
                }
                FrameTick::Finished | FrameTick::Stale => false,
            }
        };

        match Interval::start(period_ms, tick) {
            Ok(interval) => timer.set_value(Some(interval)),
            Err(e) => console::error_1(&format!("splash: {e}").into()),
        }
    };

    let _listener = window_event_listener(ev::click, move |ev| {
        let click = Click::new(f64::from(ev.page_x()), f64::from(ev.page_y()));
        let viewport = dom::document_viewport();

        let mut outcome: Option<ClickOutcome> = None;
        stage.update_value(|s| outcome = Some(s.click(click, viewport)));
        let Some(outcome) = outcome else {
            return;
        };

        audio.set_current_time(outcome.action.target_secs());
        console::log_1(
            &format!(
                "click ({}, {}) of {}x{} -> {:?}",
                click.x, click.y, viewport.width, viewport.height, outcome.action
            )
            .into(),
        );

        if let Some(spawned) = outcome.spawned {
            // Drop the previous timer before its splash leaves the DOM.
            timer.set_value(None);
            set_frame.set(None);
            set_splash.set(Some(spawned));
            animate(spawned.id);
        }
    });

    view! {
        <For
            each=move || splash.get()
            key=|s| s.id
            children=move |s: SpawnedSplash| {
                let sprite = sprite.clone();
                let background = move || frame.get().map(|f| sprite.frame_background(f));
                view! {
                    <div
                        class=class.clone()
                        style=move || splash_style(s.placement, size, background().as_deref())
                    ></div>
                }
            }
        />
    }
}
