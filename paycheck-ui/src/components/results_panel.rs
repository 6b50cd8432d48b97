use gpui::{AnyElement, App, ClickEvent, Hsla, IntoElement, ParentElement, Styled, Window, div};
use gpui_component::{StyledExt, Theme, h_flex, v_flex};
use paycheck_core::{LineItem, LineItemKind, PaycheckBreakdown};

use crate::{
    components::make_button,
    state::{AppState, ResultsView},
};

pub const EMPTY_HINT: &str = "Enter your gross annual pay to see a paycheck breakdown.";
pub const NO_RESULTS_MESSAGE: &str = "Please enter a gross pay amount greater than zero.";

/// Row text colour by line item kind.
pub fn line_item_color(
    kind: LineItemKind,
    cx: &App,
) -> Hsla {
    let colors = &Theme::global(cx).colors;
    match kind {
        LineItemKind::Gross | LineItemKind::TaxableGross => colors.foreground,
        LineItemKind::PreTaxDeduction => colors.red,
        LineItemKind::FederalTax => colors.blue,
        LineItemKind::StateTax => colors.yellow,
        LineItemKind::Fica => colors.chart_4,
        LineItemKind::TotalDeductions => colors.danger,
        LineItemKind::NetPay => colors.success,
    }
}

/// Renders whichever of the three result states `state` is in.
pub fn render_results(
    state: &AppState,
    on_copy: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    cx: &App,
) -> AnyElement {
    match (state.results, state.last_breakdown.as_ref()) {
        (ResultsView::Results, Some(breakdown)) => {
            render_breakdown(breakdown, on_copy, cx).into_any_element()
        }
        (ResultsView::NoResults, _) => render_message(NO_RESULTS_MESSAGE, cx).into_any_element(),
        _ => render_message(EMPTY_HINT, cx).into_any_element(),
    }
}

fn render_message(
    message: &'static str,
    cx: &App,
) -> impl IntoElement {
    div()
        .w_full()
        .p_4()
        .text_color(Theme::global(cx).colors.muted_foreground)
        .child(message)
}

fn render_breakdown(
    breakdown: &PaycheckBreakdown,
    on_copy: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    cx: &App,
) -> impl IntoElement {
    v_flex()
        .w_full()
        .gap_2()
        .child(
            h_flex()
                .w_full()
                .justify_between()
                .items_center()
                .child(div().text_lg().font_semibold().child(breakdown.summary()))
                .child(make_button("copy-all", "Copy All", on_copy)),
        )
        .children(
            breakdown
                .line_items
                .iter()
                .map(|item| render_line_item(item, cx)),
        )
}

fn render_line_item(
    item: &LineItem,
    cx: &App,
) -> impl IntoElement {
    let colors = &Theme::global(cx).colors;
    let row = h_flex()
        .w_full()
        .justify_between()
        .px_3()
        .py_2()
        .rounded_md()
        .border_1()
        .border_color(colors.border)
        .child(
            div()
                .text_color(line_item_color(item.kind, cx))
                .child(item.label.clone()),
        )
        .child(div().child(item.formatted_value()));

    if item.is_highlight {
        row.border_2()
            .border_color(colors.success)
            .bg(colors.accent)
            .font_semibold()
    } else {
        row
    }
}
