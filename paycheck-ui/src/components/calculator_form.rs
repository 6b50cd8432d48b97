use gpui::{
    App, AppContext, Context, Entity, IntoElement, ParentElement, Render, RenderOnce, SharedString,
    Styled, Window,
};
use gpui_component::{
    IndexPath,
    input::{Input, InputState, MaskPattern},
    select::{Select, SelectState},
    v_flex,
};
use paycheck_core::PayFrequency;

use crate::components::make_labeled_row;

/// Gross annual pay and pay frequency inputs.
pub struct CalculatorForm {
    gross_pay: Entity<InputState>,
    frequency: Entity<SelectState<Vec<SharedString>>>,
}

impl CalculatorForm {
    pub fn new(
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let labels: Vec<SharedString> = PayFrequency::all()
            .iter()
            .map(|f| SharedString::from(f.label()))
            .collect();
        let initial_index = PayFrequency::all()
            .iter()
            .position(|f| *f == PayFrequency::Monthly)
            .map(|i| IndexPath::default().row(i));

        let frequency = cx.new(|cx| SelectState::new(labels, initial_index, window, cx));

        let gross_pay = cx.new(|cx| {
            InputState::new(window, cx)
                .mask_pattern(MaskPattern::Number {
                    separator: Some(','),
                    fraction: Some(2),
                })
                .placeholder("e.g. 65,000")
        });

        Self {
            gross_pay,
            frequency,
        }
    }

    pub fn gross_pay_input(&self) -> &Entity<InputState> {
        &self.gross_pay
    }

    /// Raw gross pay text as typed.
    pub fn gross_pay(
        &self,
        cx: &App,
    ) -> String {
        self.gross_pay.read(cx).value().to_string()
    }

    /// Token of the selected frequency, or an empty string with no selection.
    pub fn frequency_token(
        &self,
        cx: &App,
    ) -> String {
        self.frequency
            .read(cx)
            .selected_value()
            .and_then(|label| {
                PayFrequency::all()
                    .iter()
                    .find(|f| f.label() == label.as_ref())
            })
            .map(|f| f.as_token().to_string())
            .unwrap_or_default()
    }

    pub fn clear_gross_pay(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.gross_pay
            .update(cx, |state, cx| state.set_value("", window, cx));
    }
}

impl Render for CalculatorForm {
    fn render(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        v_flex()
            .gap_2()
            .w_full()
            .child(make_labeled_row("Gross annual pay: $").child(Input::new(&self.gross_pay).flex_grow()))
            .child(
                make_labeled_row("Pay frequency:")
                    .child(Select::new(&self.frequency).w_full().render(window, cx)),
            )
    }
}
