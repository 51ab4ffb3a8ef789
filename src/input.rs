use winit::event::{ElementState, VirtualKeyCode};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    Close,
    ToggleWireframe,
}

/// Keys a lesson reacts to. Escape always closes the window.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub wireframe: bool,
}

impl KeyBindings {
    pub fn action(&self, key: VirtualKeyCode, state: ElementState) -> Option<Action> {
        if state != ElementState::Pressed {
            return None;
        }
        match key {
            VirtualKeyCode::Escape => Some(Action::Close),
            VirtualKeyCode::W if self.wireframe => Some(Action::ToggleWireframe),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum PolygonMode {
    #[default]
    Fill,
    Line,
}

impl PolygonMode {
    pub fn toggled(self) -> Self {
        match self {
            PolygonMode::Fill => PolygonMode::Line,
            PolygonMode::Line => PolygonMode::Fill,
        }
    }

    pub fn gl_mode(self) -> u32 {
        match self {
            PolygonMode::Fill => glow::FILL,
            PolygonMode::Line => glow::LINE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_closes() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.action(VirtualKeyCode::Escape, ElementState::Pressed),
            Some(Action::Close)
        );
        assert_eq!(
            bindings.action(VirtualKeyCode::Escape, ElementState::Released),
            None
        );
        assert_eq!(
            bindings.action(VirtualKeyCode::Space, ElementState::Pressed),
            None
        );
    }

    #[test]
    fn wireframe_key_only_when_bound() {
        let plain = KeyBindings::default();
        assert_eq!(plain.action(VirtualKeyCode::W, ElementState::Pressed), None);

        let quad = KeyBindings { wireframe: true };
        assert_eq!(
            quad.action(VirtualKeyCode::W, ElementState::Pressed),
            Some(Action::ToggleWireframe)
        );
        assert_eq!(quad.action(VirtualKeyCode::W, ElementState::Released), None);
    }

    #[test]
    fn wireframe_alternates() {
        let mode = PolygonMode::default();
        assert_eq!(mode.gl_mode(), glow::FILL);
        assert_eq!(mode.toggled().gl_mode(), glow::LINE);
        assert_eq!(mode.toggled().toggled(), PolygonMode::Fill);
    }
}
