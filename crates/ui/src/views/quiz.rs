use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use quiz_core::SurveyPhase;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::views::results::ResultsPanel;
use crate::vm::{QuestionVm, QuizIntent, QuizOutcome, ResultsVm, start_quiz};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
enum Screen {
    Failed(ViewError),
    /// Reset and waiting for the landing page to take over.
    Idle,
    Question(QuestionVm),
    Results(ResultsVm),
}

fn option_class(selected: bool) -> &'static str {
    if selected { "option option--selected" } else { "option" }
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let service = ctx.survey_service();

    let service_for_start = service.clone();
    let vm = use_signal(move || start_quiz(&service_for_start));
    let mut error = use_signal(|| None::<ViewError>);

    let dispatch = {
        let service = service.clone();
        use_callback(move |intent: QuizIntent| {
            let mut vm = vm;
            let outcome = match vm.write().as_mut() {
                Ok(quiz) => quiz.dispatch(&service, intent),
                Err(err) => Err(*err),
            };
            match outcome {
                Ok(QuizOutcome::Restarted) => {
                    error.set(None);
                    let _ = navigator.push(Route::Home {});
                }
                Ok(QuizOutcome::Continue | QuizOutcome::Completed) => error.set(None),
                Err(err) => {
                    tracing::warn!(?intent, ?err, "quiz action rejected");
                    error.set(Some(err));
                }
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch);
            }
        }
    }

    let screen = match &*vm.read() {
        Err(err) => Screen::Failed(*err),
        Ok(quiz) if quiz.session().phase() == SurveyPhase::NotStarted => Screen::Idle,
        Ok(quiz) if quiz.is_complete() => match quiz.results(&service) {
            Ok(results) => Screen::Results(results),
            Err(err) => Screen::Failed(err),
        },
        Ok(quiz) => quiz
            .question()
            .map_or(Screen::Failed(ViewError::OutOfProtocol), Screen::Question),
    };
    let error_note = error().map(ViewError::message);

    rsx! {
        div { class: "page quiz-page",
            if let Some(note) = error_note {
                p { class: "notice notice--error", "{note}" }
            }
            match screen {
                Screen::Failed(err) => {
                    let message = err.message();
                    rsx! {
                        div { class: "notice notice--config",
                            p { "{message}" }
                            Link { class: "btn btn-secondary", to: Route::Home {}, "Back" }
                        }
                    }
                }
                Screen::Idle => rsx! {
                    div { class: "notice",
                        p { "The quiz has been reset." }
                        Link { class: "btn btn-primary", to: Route::Home {}, "Back to start" }
                    }
                },
                Screen::Question(question) => rsx! {
                    QuestionCard { question, on_intent: dispatch }
                },
                Screen::Results(results) => rsx! {
                    h2 { class: "view-title", "Quiz Results" }
                    ResultsPanel { results }
                    button {
                        class: "btn btn-secondary",
                        id: "quiz-restart",
                        r#type: "button",
                        onclick: move |_| dispatch.call(QuizIntent::Restart),
                        "Restart Quiz"
                    }
                },
            }
        }
    }
}

#[component]
fn QuestionCard(question: QuestionVm, on_intent: Callback<QuizIntent>) -> Element {
    let progress_style = format!("width: {:.0}%;", question.progress_percent);
    let option_buttons = question.options.iter().map(|option| {
        let choice = option.option;
        let key = choice.key();
        let label = option.label;
        let class = option_class(option.selected);
        let checked = if option.selected { "true" } else { "false" };
        rsx! {
            button {
                key: "{key}",
                class: "{class}",
                r#type: "button",
                role: "radio",
                aria_checked: checked,
                onclick: move |_| on_intent.call(QuizIntent::Select(choice)),
                "{label}"
            }
        }
    });

    rsx! {
        section { class: "question",
            p { class: "question__progress", "{question.progress_label}" }
            div { class: "progress",
                div { class: "progress__bar", style: "{progress_style}" }
            }
            p { class: "question__category", "{question.category_label}" }
            h3 { class: "question__text", "{question.text}" }
            div { class: "options", role: "radiogroup",
                {option_buttons}
            }
            div { class: "question__actions",
                button {
                    class: "btn btn-secondary",
                    id: "quiz-previous",
                    r#type: "button",
                    disabled: !question.can_go_back,
                    onclick: move |_| on_intent.call(QuizIntent::Previous),
                    "Previous"
                }
                button {
                    class: "btn btn-primary",
                    id: "quiz-next",
                    r#type: "button",
                    disabled: !question.can_submit,
                    onclick: move |_| on_intent.call(QuizIntent::Next),
                    "{question.next_label}"
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }
}
