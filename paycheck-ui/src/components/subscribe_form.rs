use gpui::{App, AppContext, Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div};
use gpui_component::{
    StyledExt,
    input::{Input, InputState},
    v_flex,
};

/// Newsletter sign-up. Nothing leaves the machine; see `UiAction::Subscribe`.
pub struct SubscribeForm {
    email: Entity<InputState>,
}

impl SubscribeForm {
    pub fn new(
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let email = cx.new(|cx| InputState::new(window, cx).placeholder("you@example.com"));
        Self { email }
    }

    pub fn email_input(&self) -> &Entity<InputState> {
        &self.email
    }

    pub fn email(
        &self,
        cx: &App,
    ) -> String {
        self.email.read(cx).value().to_string()
    }

    pub fn clear(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.email
            .update(cx, |state, cx| state.set_value("", window, cx));
    }
}

impl Render for SubscribeForm {
    fn render(
        &mut self,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) -> impl IntoElement {
        v_flex()
            .gap_2()
            .w_full()
            .child(div().font_semibold().child("Get payroll tips by email"))
            .child(Input::new(&self.email).w_full())
    }
}
