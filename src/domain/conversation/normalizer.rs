//! Conversation Normalizer.
//!
//! Rebuilds dialogue turns from a flat tracker log. A form interaction
//! (a search intent or a `*_form` action followed by the form's loop events)
//! is grouped under the turn that opened it; everything else is a turn of
//! its own. Every input event ends up in exactly one place.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::event::DialogueEvent;

static SEARCH_INTENT: Lazy<Regex> =
    Lazy::new(|| Regex::new("service_search$").expect("valid search intent regex"));

static FORM_ACTION: Lazy<Regex> = Lazy::new(|| Regex::new("_form$").expect("valid form regex"));

/// True if the intent name denotes a service search.
pub fn is_search_intent(intent: &str) -> bool {
    SEARCH_INTENT.is_match(intent)
}

/// A normalized conversational unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub event: DialogueEvent,

    /// Events of the form this turn opened; `None` for plain turns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_events: Option<Vec<DialogueEvent>>,
}

impl Turn {
    pub fn single(event: DialogueEvent) -> Self {
        Self {
            event,
            form_events: None,
        }
    }

    pub fn opening(event: DialogueEvent) -> Self {
        Self {
            event,
            form_events: Some(Vec::new()),
        }
    }

    pub fn nest(&mut self, event: DialogueEvent) {
        self.form_events.get_or_insert_with(Vec::new).push(event);
    }

    pub fn intent_name(&self) -> Option<&str> {
        self.event.intent_name()
    }

    /// True if this turn opened a form and at least one form event followed.
    pub fn has_form_events(&self) -> bool {
        self.form_events.as_ref().is_some_and(|events| !events.is_empty())
    }

    pub fn nested(&self) -> &[DialogueEvent] {
        self.form_events.as_deref().unwrap_or(&[])
    }

    /// Number of raw events this turn accounts for.
    pub fn event_count(&self) -> usize {
        1 + self.nested().len()
    }
}

/// Whether a form is currently collecting events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormState {
    #[default]
    Idle,
    InForm,
}

/// What the normalizer does with one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTransition {
    /// Event becomes a plain top-level turn.
    TopLevel,
    /// Event opens a new form turn.
    Open,
    /// Event is nested into the open form.
    Nest,
    /// Event is nested into the open form, which then closes.
    Close,
}

impl FormState {
    /// Transition table.
    pub fn on_event(self, event: &DialogueEvent) -> FormTransition {
        match self {
            FormState::Idle if starts_form(event) => FormTransition::Open,
            FormState::Idle => FormTransition::TopLevel,
            FormState::InForm if ends_form(event) => FormTransition::Close,
            FormState::InForm => FormTransition::Nest,
        }
    }
}

fn starts_form(event: &DialogueEvent) -> bool {
    let search_intent = event.parse_data.is_some() && event.intent_name().is_some_and(is_search_intent);
    let form_action = event.name.as_deref().is_some_and(|name| FORM_ACTION.is_match(name));
    search_intent || form_action
}

fn ends_form(event: &DialogueEvent) -> bool {
    event.is_loop_exit() || event.is_rejection()
}

/// Incremental normalizer. The open form turn is held apart from the
/// finished turns, so "in a form" and "has an open turn" cannot disagree.
#[derive(Debug, Default)]
pub struct Normalizer {
    turns: Vec<Turn>,
    open: Option<Turn>,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FormState {
        if self.open.is_some() {
            FormState::InForm
        } else {
            FormState::Idle
        }
    }

    pub fn push(&mut self, event: DialogueEvent) {
        let transition = self.state().on_event(&event);
        match (self.open.take(), transition) {
            (None, FormTransition::Open) => self.open = Some(Turn::opening(event)),
            (None, _) => self.turns.push(Turn::single(event)),
            (Some(mut form), FormTransition::Close) => {
                form.nest(event);
                self.turns.push(form);
            }
            (Some(mut form), _) => {
                form.nest(event);
                self.open = Some(form);
            }
        }
    }

    /// Returns all turns; a form still open at the end is kept as the last turn.
    pub fn finish(mut self) -> Vec<Turn> {
        if let Some(form) = self.open.take() {
            self.turns.push(form);
        }
        self.turns
    }
}

/// Groups a raw event log into turns.
pub fn normalize(events: Vec<DialogueEvent>) -> Vec<Turn> {
    let mut normalizer = Normalizer::new();
    for event in events {
        normalizer.push(event);
    }
    normalizer.finish()
}

/// Moves each rejection in front of the event recorded just before it.
///
/// The dialogue engine logs the utterance that caused a rejection after the
/// rejection itself. Rejection positions are taken from the original log
/// and swapped in order; a rejection at the very start has nothing to swap
/// with and stays put.
pub fn repair_rejections(events: &mut [DialogueEvent]) {
    let rejected: Vec<usize> = events
        .iter()
        .enumerate()
        .filter(|(_, event)| event.is_rejection())
        .map(|(ix, _)| ix)
        .collect();

    for ix in rejected {
        if ix > 0 {
            events.swap(ix - 1, ix);
        }
    }
}
