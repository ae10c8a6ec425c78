use std::fmt;

use log::info;

use crate::error::Result;

/// Receives change messages from a menu.
pub trait MenuObserver {
    fn update(&mut self, message: &str) -> Result<()>;
}

impl<F> MenuObserver for F
where
    F: FnMut(&str) -> Result<()>,
{
    fn update(&mut self, message: &str) -> Result<()> {
        self(message)
    }
}

/// Ordered list of observers.
///
/// Attaching is append-only and the same observer may be attached twice.
/// Delivery is synchronous and stops at the first observer that fails.
#[derive(Default)]
pub struct ChangeNotifier {
    observers: Vec<Box<dyn MenuObserver>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, observer: Box<dyn MenuObserver>) {
        self.observers.push(observer);
    }

    pub fn notify(&mut self, message: &str) -> Result<()> {
        for observer in self.observers.iter_mut() {
            observer.update(message)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Writes every change message to the log at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct MenuChangeLogger;

impl MenuObserver for MenuChangeLogger {
    fn update(&mut self, message: &str) -> Result<()> {
        info!("[MenuChangeLogger] {}", message);
        Ok(())
    }
}
