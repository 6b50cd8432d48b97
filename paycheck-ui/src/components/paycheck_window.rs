use gpui::{
    App, AppContext, ClickEvent, Context, Entity, IntoElement, ParentElement, Render, Styled,
    Subscription, Window, div,
};
use gpui_component::{Theme, h_flex, input::InputEvent, v_flex};
use paycheck_core::PaycheckCalculator;
use tracing::debug;

use crate::{
    actions::{self, Collaborators, Effect, UiAction},
    clipboard::ClipboardWriter,
    components::{
        CalculatorForm, SubscribeForm,
        header::{render_header, render_nav_panel},
        make_button,
        results_panel::render_results,
        toast::render_toast,
    },
    preferences::PreferenceStore,
    state::{AppState, TOAST_DURATION},
    themes::apply_theme,
};

/// Root view: owns the application state and routes every UI event
/// through [`actions::dispatch`].
pub struct PaycheckWindow {
    state: AppState,
    calculator: PaycheckCalculator,
    clipboard: Box<dyn ClipboardWriter>,
    preferences: Box<dyn PreferenceStore>,
    form: Entity<CalculatorForm>,
    subscribe: Entity<SubscribeForm>,
    _subscriptions: Vec<Subscription>,
}

impl PaycheckWindow {
    pub fn new(
        state: AppState,
        clipboard: Box<dyn ClipboardWriter>,
        preferences: Box<dyn PreferenceStore>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let form = cx.new(|cx| CalculatorForm::new(window, cx));
        let subscribe = cx.new(|cx| SubscribeForm::new(window, cx));

        let gross_input = form.read(cx).gross_pay_input().clone();
        let email_input = subscribe.read(cx).email_input().clone();
        let subscriptions = vec![
            cx.subscribe_in(&gross_input, window, |this, _, event: &InputEvent, window, cx| {
                if let InputEvent::PressEnter { .. } = event {
                    this.submit(window, cx);
                }
            }),
            cx.subscribe_in(&email_input, window, |this, _, event: &InputEvent, window, cx| {
                if let InputEvent::PressEnter { .. } = event {
                    this.subscribe_email(window, cx);
                }
            }),
        ];

        Self {
            state,
            calculator: PaycheckCalculator::default(),
            clipboard,
            preferences,
            form,
            subscribe,
            _subscriptions: subscriptions,
        }
    }

    fn submit(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let form = self.form.read(cx);
        let action = UiAction::Submit {
            gross: form.gross_pay(cx),
            frequency: form.frequency_token(cx),
        };
        self.dispatch(action, window, cx);
    }

    fn subscribe_email(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let email = self.subscribe.read(cx).email(cx);
        self.dispatch(UiAction::Subscribe { email }, window, cx);
    }

    pub fn dispatch(
        &mut self,
        action: UiAction,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let mut collab = Collaborators {
            calculator: &self.calculator,
            clipboard: self.clipboard.as_mut(),
            preferences: self.preferences.as_ref(),
        };
        let effects = actions::dispatch(&mut self.state, action, &mut collab);

        for effect in effects {
            self.apply_effect(effect, window, cx);
        }
        cx.notify();
    }

    fn apply_effect(
        &mut self,
        effect: Effect,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        match effect {
            Effect::ClearGrossInput => self
                .form
                .update(cx, |form, cx| form.clear_gross_pay(window, cx)),
            Effect::ClearEmailInput => self
                .subscribe
                .update(cx, |form, cx| form.clear(window, cx)),
            Effect::ApplyTheme(theme) => apply_theme(theme, cx),
            Effect::ShowToast(id) => {
                cx.spawn(async move |this, cx| {
                    cx.background_executor().timer(TOAST_DURATION).await;
                    let _ = this.update(cx, |view, cx| {
                        if view.state.dismiss_toast(id) {
                            debug!(id, "toast dismissed");
                            cx.notify();
                        }
                    });
                })
                .detach();
            }
        }
    }

    fn on_click(
        action: UiAction,
        cx: &mut Context<Self>,
    ) -> impl Fn(&ClickEvent, &mut Window, &mut App) + 'static {
        cx.listener(move |this, _: &ClickEvent, window, cx| {
            this.dispatch(action.clone(), window, cx)
        })
    }
}

impl Render for PaycheckWindow {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let header = render_header(
            self.state.theme,
            Self::on_click(UiAction::ToggleMenu, cx),
            Self::on_click(UiAction::ToggleTheme, cx),
            cx,
        );
        let results = render_results(&self.state, Self::on_click(UiAction::CopyAll, cx), cx);
        let calculate = make_button(
            "calculate",
            "Calculate",
            cx.listener(|this, _: &ClickEvent, window, cx| this.submit(window, cx)),
        );
        let subscribe = make_button(
            "subscribe",
            "Subscribe",
            cx.listener(|this, _: &ClickEvent, window, cx| this.subscribe_email(window, cx)),
        );
        let clear = make_button("clear", "Clear", Self::on_click(UiAction::Clear, cx));

        let nav = self.state.nav_open.then(|| render_nav_panel(cx));
        let toast = self.state.toast.as_ref().map(|t| render_toast(t, cx));
        let colors = &Theme::global(cx).colors;

        div()
            .relative()
            .size_full()
            .bg(colors.background)
            .text_color(colors.foreground)
            .child(
                v_flex()
                    .size_full()
                    .p_5()
                    .gap_4()
                    .child(header)
                    .children(nav)
                    .child(self.form.clone())
                    .child(
                        h_flex()
                            .gap_4()
                            .justify_center()
                            .child(calculate)
                            .child(clear),
                    )
                    .child(results)
                    .child(
                        h_flex()
                            .gap_4()
                            .items_end()
                            .child(self.subscribe.clone())
                            .child(subscribe),
                    ),
            )
            .children(toast)
    }
}
