use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// A `setInterval` timer that is cleared when dropped.
///
/// The callback returns `false` to stop the timer from inside. The closure
/// itself stays alive until the `Interval` is dropped, so never drop it from
/// within its own callback.
pub(super) struct Interval {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub(super) fn start(
        period_ms: u32,
        mut tick: impl FnMut() -> bool + 'static,
    ) -> Result<Self, String> {
        let window = web_sys::window().ok_or("no window".to_string())?;
        let period = i32::try_from(period_ms)
            .map_err(|_| format!("timer: period {period_ms}ms too long"))?;

        let own_handle = Rc::new(Cell::new(None::<i32>));
        let callback = {
            let own_handle = Rc::clone(&own_handle);
            Closure::wrap(Box::new(move || {
                if !tick() {
                    if let Some(handle) = own_handle.take() {
                        clear(handle);
                    }
                }
            }) as Box<dyn FnMut()>)
        };

        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                period,
            )
            .map_err(|_| "timer: set_interval failed".to_string())?;
        own_handle.set(Some(handle));

        Ok(Self {
            handle,
            _callback: callback,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        // Clearing an already-cleared handle is a no-op.
        clear(self.handle);
    }
}

fn clear(handle: i32) {
    if let Some(w) = web_sys::window() {
        w.clear_interval_with_handle(handle);
    }
}
