use gloo_timers::callback::Timeout;
use gloo_utils::document;
use log::warn;
use shared::constants::EXIT_ANIMATION;
use shared::{Notification, Presenter, RenderError, Scheduler, TaskHandle};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

const KEYFRAMES_STYLE_ID: &str = "notification-keyframes";

pub type Toaster = Presenter<DomRenderer, TimeoutScheduler>;

pub fn toaster() -> Toaster {
    Presenter::new(DomRenderer, TimeoutScheduler)
}

fn dom_error(err: JsValue) -> RenderError {
    RenderError::Dom(format!("{err:?}"))
}

/// Draws notifications straight into `document.body`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomRenderer;

impl shared::Renderer for DomRenderer {
    type Node = HtmlElement;

    fn install_styles(&self, css: &str) -> Result<(), RenderError> {
        let document = document();
        if document.get_element_by_id(KEYFRAMES_STYLE_ID).is_some() {
            return Ok(());
        }
        let head = document.head().ok_or(RenderError::MissingElement("head"))?;
        let style = document.create_element("style").map_err(dom_error)?;
        style.set_id(KEYFRAMES_STYLE_ID);
        style.set_text_content(Some(css));
        head.append_child(&style).map_err(dom_error)?;
        Ok(())
    }

    fn mount(&self, notification: &Notification) -> Result<HtmlElement, RenderError> {
        let document = document();
        let body = document.body().ok_or(RenderError::MissingElement("body"))?;
        let element = document
            .create_element("div")
            .map_err(dom_error)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| RenderError::Dom("created element is not an HtmlElement".to_string()))?;

        element.set_class_name(&notification.class_name());
        element.set_text_content(Some(notification.message.as_str()));
        element.style().set_css_text(&notification.style());
        body.append_child(&element).map_err(dom_error)?;
        Ok(element)
    }

    fn begin_exit(&self, node: &HtmlElement) {
        if let Err(err) = node.style().set_property("animation", EXIT_ANIMATION) {
            warn!("Failed to start notification exit: {err:?}");
        }
    }

    fn unmount(&self, node: &HtmlElement) {
        node.remove();
    }
}

/// `setTimeout` scheduling. The returned handle only clears the timer when
/// `cancel` is called explicitly.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

pub struct TimeoutHandle(JsValue);

impl TaskHandle for TimeoutHandle {
    fn cancel(self) {
        if let Some(id) = self.0.as_f64() {
            gloo_utils::window().clear_timeout_with_handle(id as i32);
        }
    }
}

impl Scheduler for TimeoutScheduler {
    type Handle = TimeoutHandle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TimeoutHandle {
        TimeoutHandle(Timeout::new(delay_ms, task).forget())
    }
}
