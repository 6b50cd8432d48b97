pub mod calculator_form;
pub mod header;
pub mod paycheck_window;
pub mod results_panel;
pub mod subscribe_form;
pub mod toast;

use gpui::{App, ClickEvent, Div, ParentElement, Pixels, SharedString, Size, Styled, TextAlign, Window, div, px};
use gpui_component::Sizable;
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::h_flex;

pub use calculator_form::CalculatorForm;
pub use paycheck_window::PaycheckWindow;
pub use subscribe_form::SubscribeForm;

#[derive(Debug, Clone, Copy)]
pub struct WindowPreferences {
    pub size: Size<Pixels>,
}

impl Default for WindowPreferences {
    fn default() -> Self {
        Self {
            size: Size {
                width: px(720.0),
                height: px(820.0),
            },
        }
    }
}

/// Creates a primary-styled button with a custom click handler.
pub fn make_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    Button::new(id.into())
        .primary()
        .large()
        .w(px(140.))
        .label(label.into())
        .on_click(on_click)
}

/// Borderless button for toolbar toggles.
pub fn make_ghost_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    Button::new(id.into())
        .ghost()
        .label(label.into())
        .on_click(on_click)
}

/// Creates the common outer container and label used by form rows,
/// keeping alignment and spacing consistent.
pub fn make_labeled_row(label: impl Into<SharedString>) -> Div {
    h_flex()
        .items_center()
        .gap_5()
        .p(px(2.))
        .child(
            div()
                .min_w(px(150.))
                .text_align(TextAlign::Right)
                .child(label.into()),
        )
}
