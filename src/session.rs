/// Popup session: what happens on each UI event
///
/// The handlers here decide the effect of a click or a close request without
/// touching the toolkit. The GUI forwards events into a [`Session`], which
/// executes the effect against its [`ResultSink`] and reports whether the
/// process should end.
use crate::config::ActionList;
use crate::result_file::{deliver_best_effort, ResultSink};

/// Side effects requested by an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effect {
    /// Label to write to the result file, if any
    pub write: Option<String>,
    pub exit: bool,
}

impl Effect {
    pub fn none() -> Self {
        Effect { write: None, exit: false }
    }
}

pub fn on_button_click(label: &str) -> Effect {
    Effect {
        write: Some(label.to_string()),
        exit: true,
    }
}

pub fn on_window_close() -> Effect {
    Effect { write: None, exit: true }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Init,
    Displayed,
    Terminated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupEvent {
    /// Button at this index was pressed
    ButtonClicked(usize),
    WindowClosed,
}

/// How the session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Selected { label: String, recorded: bool },
    Dismissed,
}

pub struct Session<S> {
    actions: ActionList,
    sink: S,
    state: Lifecycle,
}

impl<S: ResultSink> Session<S> {
    pub fn new(actions: ActionList, sink: S) -> Self {
        Session {
            actions,
            sink,
            state: Lifecycle::Init,
        }
    }

    pub fn actions(&self) -> &ActionList {
        &self.actions
    }

    pub fn state(&self) -> Lifecycle {
        self.state
    }

    /// Init -> Displayed, once the window is up
    pub fn mark_displayed(&mut self) {
        if self.state == Lifecycle::Init {
            tracing::debug!("Session displayed with {} actions", self.actions.len());
            self.state = Lifecycle::Displayed;
        }
    }

    /// Map an event to its effect
    ///
    /// Only a displayed session reacts; anything else, including a click on an
    /// index outside the action list, yields no effect.
    pub fn effect_for(&self, event: &PopupEvent) -> Effect {
        if self.state != Lifecycle::Displayed {
            return Effect::none();
        }

        match event {
            PopupEvent::ButtonClicked(index) => match self.actions.get(*index) {
                Some(label) => on_button_click(label),
                None => Effect::none(),
            },
            PopupEvent::WindowClosed => on_window_close(),
        }
    }

    /// Handle an event and carry out its effect
    ///
    /// Returns how the session ended when the event terminated it, in which
    /// case the process should end.
    pub fn dispatch(&mut self, event: PopupEvent) -> Option<Outcome> {
        let effect = self.effect_for(&event);
        if !effect.exit {
            return None;
        }

        let outcome = match effect.write {
            Some(label) => {
                let recorded = deliver_best_effort(&self.sink, &label);
                Outcome::Selected { label, recorded }
            }
            None => Outcome::Dismissed,
        };
        self.terminate();

        Some(outcome)
    }

    pub fn terminate(&mut self) {
        if self.state != Lifecycle::Terminated {
            tracing::debug!("Session {:?} -> Terminated", self.state);
            self.state = Lifecycle::Terminated;
        }
    }
}
