use spinoff::{Color, Spinner, Streams, spinners};
use std::io::IsTerminal;

/// Optional progress spinner. It lives on stderr so stdout stays pure TSV.
pub struct SpinnerContainer {
    instance: Option<Spinner>,
}

impl SpinnerContainer {
    // The spinner api itself doesn't provide a way to create an empty instance,
    // so an Option stands in for "no spinner".
    pub fn new() -> Self {
        SpinnerContainer { instance: None }
    }

    /// Starts spinning unless told not to, or unless nobody is watching stderr.
    pub fn start_unless_no_terminal_or(&mut self, no_animate: bool) {
        if no_animate || !std::io::stderr().is_terminal() {
            return;
        }

        self.instance = Some(Spinner::new_with_stream(
            spinners::Dots,
            "Retrieving",
            Color::Blue,
            Streams::Stderr,
        ));
    }

    pub fn update_text(&mut self, message: String) {
        if let Some(spinner) = self.instance.as_mut() {
            spinner.update_text(message)
        }
    }

    /// Wipes the spinner line. Has to take ownership to prevent double stopping.
    pub fn finish(&mut self) {
        if let Some(mut spinner) = self.instance.take() {
            spinner.clear();
        }
    }
}

impl Drop for SpinnerContainer {
    fn drop(&mut self) {
        self.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_animate_never_spins() {
        let mut display = SpinnerContainer::new();

        display.start_unless_no_terminal_or(true);

        assert!(display.instance.is_none());
    }

    #[test]
    fn idle_container_tolerates_everything() {
        let mut display = SpinnerContainer::new();

        display.update_text("Retrieving..".to_owned());
        display.finish();
        display.finish();

        assert!(display.instance.is_none());
    }
}
