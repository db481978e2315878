use crate::components::{
    day_selector::DaySelector,
    nutrition_progress_bar::NutritionProgressBar,
};
use crate::nutrition::{DayRecord, NutritionLog};
use gloo::console::{error, log};
use wasm_bindgen::JsValue;
use yew::prelude::*;

pub struct App {
    nutrition_log: Option<NutritionLog>,
    selected_day: String,
    today: String,
}

pub enum Msg {
    SelectDay(String),
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let nutrition_log = match NutritionLog::sample() {
            Ok(nutrition_log) => {
                log!(format!("Loaded nutrition log: {} days", nutrition_log.days.len()));
                Some(nutrition_log)
            },
            Err(e) => {
                error!(format!("{}", e));
                None
            },
        };

        let selected_day = nutrition_log
            .as_ref()
            .and_then(NutritionLog::latest)
            .map(|day| day.date.clone())
            .unwrap_or_default();

        let today = js_sys::Date::new_0()
            .to_locale_date_string("ko-KR", &JsValue::UNDEFINED)
            .into();

        Self {
            nutrition_log,
            selected_day,
            today,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SelectDay(date) => {
                if self.selected_day == date {
                    return false;
                }
                self.selected_day = date;
                true
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let dates = self
            .nutrition_log
            .as_ref()
            .map(NutritionLog::dates)
            .unwrap_or_default();

        html! {
            <div class="app-container">
                <header>
                    <h1>{ "Daily Nutrition" }</h1>
                    <div class="text-sm text-gray-500">{ format!("Today: {}", self.today) }</div>
                </header>

                <main>
                    <div class="panel">
                        <DaySelector
                            dates={dates}
                            selected={self.selected_day.clone()}
                            on_day_change={ctx.link().callback(Msg::SelectDay)}
                        />

                        { self.view_day() }
                    </div>
                </main>
            </div>
        }
    }
}

impl App {
    fn selected(&self) -> Option<&DayRecord> {
        self.nutrition_log.as_ref()?.day(&self.selected_day)
    }

    fn view_day(&self) -> Html {
        match self.selected() {
            Some(day) => html! {
                <div class="nutrient-list">
                    {
                        for day.nutrients.iter().map(|nutrient| {
                            html! {
                                <NutritionProgressBar
                                    key={nutrient.label.clone()}
                                    label={nutrient.label.clone()}
                                    current={nutrient.current}
                                    target={nutrient.target}
                                    unit={nutrient.unit.clone()}
                                    color={nutrient.color}
                                    class_name="mb-4"
                                />
                            }
                        })
                    }
                </div>
            },
            None => html! {
                <div class="text-sm text-gray-400">{ "No nutrition records" }</div>
            },
        }
    }
}
