use web_sys::{Event, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DaySelectorProps {
    pub dates: Vec<String>,
    pub selected: String,
    pub on_day_change: Callback<String>,
}

#[function_component(DaySelector)]
pub fn day_selector(props: &DaySelectorProps) -> Html {
    let on_change = {
        let on_day_change = props.on_day_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_day_change.emit(select.value());
        })
    };

    html! {
        <div class="form-group">
            <label for="log-day">{ "Day:" }</label>
            <select
                id="log-day"
                value={props.selected.clone()}
                onchange={on_change}
                disabled={props.dates.is_empty()}
            >
                {
                    for props.dates.iter().map(|date| {
                        html! {
                            <option value={date.clone()} selected={*date == props.selected}>
                                { date }
                            </option>
                        }
                    })
                }
            </select>
        </div>
    }
}
