use dioxus::prelude::*;

use crate::components::app_view::AppView;

const BACK_STACK_LIMIT: usize = 48;

/// Signal-backed view switching with a bounded back stack. All navigation in
/// the app goes through here.
#[derive(Clone)]
pub struct Navigation {
    current: Signal<AppView>,
    back_stack: Signal<Vec<AppView>>,
}

impl Navigation {
    pub fn new(current: Signal<AppView>, back_stack: Signal<Vec<AppView>>) -> Self {
        Self {
            current,
            back_stack,
        }
    }

    pub fn current(&self) -> AppView {
        let current = self.current.clone();
        current()
    }

    pub fn go_to(&self, target: AppView) {
        let mut current = self.current.clone();
        let previous = current();
        if previous == target {
            return;
        }

        let mut back_stack = self.back_stack.clone();
        let mut stack = back_stack();
        stack.push(previous);
        if stack.len() > BACK_STACK_LIMIT {
            stack.remove(0);
        }
        back_stack.set(stack);

        current.set(target);
    }

    pub fn can_go_back(&self) -> bool {
        let back_stack = self.back_stack.clone();
        !back_stack().is_empty()
    }

    pub fn go_back(&self) -> Option<AppView> {
        let mut back_stack = self.back_stack.clone();
        let mut stack = back_stack();
        let previous = stack.pop();
        back_stack.set(stack);
        previous.map(|view| {
            self.current.clone().set(view.clone());
            view
        })
    }

    /// Jump somewhere and drop the history, for login/logout transitions.
    pub fn reset_to(&self, target: AppView) {
        let mut back_stack = self.back_stack.clone();
        back_stack.set(Vec::new());
        self.current.clone().set(target);
    }
}
