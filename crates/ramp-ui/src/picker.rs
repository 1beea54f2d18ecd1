use ramp_engine::paint::Color;

/// Host-provided color selection.
///
/// Called synchronously; a modal dialog, a popover driven by a nested event
/// loop, or a scripted answer all fit. Returning `None` means the user
/// cancelled and nothing changes.
pub trait ColorPicker {
    fn pick(&mut self, initial: Color) -> Option<Color>;
}

impl<F> ColorPicker for F
where
    F: FnMut(Color) -> Option<Color>,
{
    #[inline]
    fn pick(&mut self, initial: Color) -> Option<Color> {
        self(initial)
    }
}

/// Picker used until the host installs one. Always cancels.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPicker;

impl ColorPicker for NoPicker {
    fn pick(&mut self, _initial: Color) -> Option<Color> {
        log::debug!("no color picker installed; ignoring color request");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_pickers() {
        let mut invert = |c: Color| {
            let (r, g, b, a) = c.to_straight();
            Some(Color::from_straight(1.0 - r, 1.0 - g, 1.0 - b, a))
        };
        assert_eq!(invert.pick(Color::white()), Some(Color::black()));
    }

    #[test]
    fn no_picker_cancels() {
        assert_eq!(NoPicker.pick(Color::white()), None);
    }
}
