//! Hooks that bind the shared controllers to Yew state.

use std::rc::Rc;
use std::time::Duration;

use noteflow_controllers::{
    ControllerError, DisclosureController, RotationController, RotationState,
};
use yew::prelude::*;

use crate::config;
use crate::timers::GlooTimers;

#[derive(Clone, PartialEq)]
pub struct UseRotationHandle {
    pub state: RotationState,
    pub go_to: Callback<usize>,
    pub next: Callback<()>,
    pub previous: Callback<()>,
    pub toggle_auto: Callback<()>,
}

/// Rotates through `len` items every `period`. The controller lives as long
/// as the calling component is mounted.
#[hook]
pub fn use_rotation(len: usize, period: Duration) -> UseRotationHandle {
    let state = use_state(|| RotationState {
        active_index: 0,
        auto_advance: true,
    });
    let controller = use_mut_ref(|| None::<RotationController<GlooTimers>>);

    {
        let state = state.clone();
        let controller = controller.clone();
        use_effect_with_deps(
            move |&(len, period): &(usize, Duration)| {
                match RotationController::new(len, config::ROTATION_RESUME_DELAY, GlooTimers) {
                    Ok(rotation) => {
                        state.set(rotation.state());
                        let rotation = rotation.with_listener(move |next| state.set(next));
                        rotation.start(period);
                        *controller.borrow_mut() = Some(rotation);
                    }
                    Err(err) => gloo_console::error!(format!("rotation disabled: {}", err)),
                }
                move || {
                    if let Some(rotation) = controller.borrow_mut().take() {
                        rotation.stop();
                    }
                }
            },
            (len, period),
        );
    }

    let with_controller = {
        let controller = controller.clone();
        move |action: fn(&RotationController<GlooTimers>)| {
            let controller = controller.clone();
            Callback::from(move |_: ()| {
                if let Some(rotation) = controller.borrow().as_ref() {
                    action(rotation);
                }
            })
        }
    };

    let go_to = {
        let controller = controller.clone();
        Callback::from(move |index: usize| {
            if let Some(rotation) = controller.borrow().as_ref() {
                if let Err(err) = rotation.go_to(index) {
                    gloo_console::error!(err.to_string());
                }
            }
        })
    };

    UseRotationHandle {
        state: *state,
        go_to,
        next: with_controller(|rotation| rotation.next()),
        previous: with_controller(|rotation| rotation.previous()),
        toggle_auto: with_controller(|rotation| rotation.toggle_auto_advance()),
    }
}

/// Applies one toggle. A disabled disclosure stays disabled.
fn toggled(
    controller: Option<DisclosureController>,
    index: usize,
) -> Result<Option<DisclosureController>, ControllerError> {
    let Some(mut controller) = controller else {
        return Ok(None);
    };
    controller.toggle(index)?;
    Ok(Some(controller))
}

#[derive(Clone, Copy, PartialEq)]
struct DisclosureState {
    controller: Option<DisclosureController>,
}

impl Reducible for DisclosureState {
    type Action = usize;

    fn reduce(self: Rc<Self>, index: usize) -> Rc<Self> {
        match toggled(self.controller, index) {
            Ok(controller) => Rc::new(Self { controller }),
            Err(err) => {
                gloo_console::error!(err.to_string());
                self
            }
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct UseDisclosureHandle {
    controller: Option<DisclosureController>,
    pub toggle: Callback<usize>,
}

impl UseDisclosureHandle {
    pub fn is_open(&self, index: usize) -> bool {
        self.controller
            .map(|controller| controller.is_open(index))
            .unwrap_or(false)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.controller.and_then(|controller| controller.open_index())
    }
}

/// Single-open disclosure over `len` items, `initial` open on mount.
#[hook]
pub fn use_disclosure(len: usize, initial: Option<usize>) -> UseDisclosureHandle {
    let state = use_reducer(|| DisclosureState {
        controller: match DisclosureController::new(len, initial) {
            Ok(controller) => Some(controller),
            Err(err) => {
                gloo_console::error!(format!("disclosure disabled: {}", err));
                None
            }
        },
    });

    let toggle = {
        let dispatcher = state.dispatcher();
        Callback::from(move |index: usize| dispatcher.dispatch(index))
    };

    UseDisclosureHandle {
        controller: state.controller,
        toggle,
    }
}
