/// User-facing notification channel.
///
/// A call shows one message and blocks until the user has seen it; the web
/// rendition of this was `window.alert`. Injected as a collaborator so
/// tests can record what was shown.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Stand-in notifier for command-line hosts: writes the message to stderr
/// without waiting for an acknowledgement.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{}", message);
    }
}
