//! Backend-independent input events and the held-key state built from them.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    Quit,
}

/// Arrow keys currently held, plus whether a quit was requested.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub quit: bool,
}

impl KeyState {
    pub fn process_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(key) => *self.slot(key) = true,
            InputEvent::KeyUp(key) => *self.slot(key) = false,
            InputEvent::Quit => self.quit = true,
        }
    }

    pub fn process_events(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        for event in events {
            self.process_event(event);
        }
    }

    fn slot(&mut self, key: Key) -> &mut bool {
        match key {
            Key::Up => &mut self.up,
            Key::Down => &mut self.down,
            Key::Left => &mut self.left,
            Key::Right => &mut self.right,
        }
    }
}
