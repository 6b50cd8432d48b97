use gpui::{App, IntoElement, ParentElement, Styled, div};
use gpui_component::Theme;

use crate::state::{Toast, ToastKind};

pub fn render_toast(
    toast: &Toast,
    cx: &App,
) -> impl IntoElement {
    let colors = &Theme::global(cx).colors;
    let (bg, fg) = match toast.kind {
        ToastKind::Success => (colors.success, colors.success_foreground),
        ToastKind::Error => (colors.danger, colors.danger_foreground),
    };

    div()
        .absolute()
        .bottom_4()
        .right_4()
        .px_4()
        .py_2()
        .rounded_md()
        .shadow_md()
        .bg(bg)
        .text_color(fg)
        .child(toast.message.clone())
}
