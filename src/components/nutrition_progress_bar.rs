use gloo::console::debug;
use yew::prelude::*;

use crate::display::{BarView, ColorName};

#[derive(Properties, PartialEq)]
pub struct NutritionProgressBarProps {
    pub label: String,
    #[prop_or_default]
    pub current: Option<f64>,
    #[prop_or_default]
    pub target: Option<f64>,
    #[prop_or_default]
    pub unit: String,
    #[prop_or_default]
    pub color: ColorName,
    /// Extra classes for the root container, appended as given.
    #[prop_or_default]
    pub class_name: String,
}

#[function_component(NutritionProgressBar)]
pub fn nutrition_progress_bar(props: &NutritionProgressBarProps) -> Html {
    let view = BarView::derive(props.current, props.target, &props.unit, props.color);

    if view == BarView::NoData {
        debug!(format!("No usable reading for '{}'", props.label));
    }

    html! {
        <div class={format!("w-full {}", props.class_name)}>
            <div class="flex items-center justify-between mb-1">
                <div class="text-sm font-medium">{ &props.label }</div>
                <div class={view.status_class()}>{ view.status_text() }</div>
            </div>
            <div class="w-full h-2 bg-gray-200 rounded-full overflow-hidden">
                <div
                    class={format!("h-2 rounded-full {}", view.fill_class())}
                    style={format!("width: {}%", view.fill_width())}
                ></div>
            </div>
            <div class={view.footer_class()}>{ view.footer_text() }</div>
        </div>
    }
}
