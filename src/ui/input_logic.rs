use super::{InputEvent, InputKey, InputKind};

/// What a key press asks the controller to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    Increase,
    Decrease,
    Toggle,
    Exit,
}

/// Map an input event to an action. Only presses act; Up/Down are unused.
pub fn action_for(event: InputEvent) -> Option<Action> {
    if event.kind != InputKind::Press {
        return None;
    }
    match event.key {
        InputKey::Right => Some(Action::Increase),
        InputKey::Left => Some(Action::Decrease),
        InputKey::Ok => Some(Action::Toggle),
        InputKey::Back => Some(Action::Exit),
        InputKey::Up | InputKey::Down => None,
    }
}
