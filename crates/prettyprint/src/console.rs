use std::io::{IsTerminal, Result, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use crate::style::{fidelity_from_environment, Fidelity};
use crate::util::{Env, Environment};

/// A boxed output destination.
pub type Output = Box<dyn Write + Send>;

/// The process-scoped state for rendering and emitting styled text.
///
/// A console bundles the styling toggle, which all [`Style`](crate::Style)
/// renders consult, with the output destination, which all printer `emit`
/// methods write to. The toggle defaults to enabled and the output to standard
/// output.
///
/// There is one [`Console::global`] instance, which backs the free functions
/// [`enable_styling`], [`disable_styling`], [`is_styling_enabled`], and
/// [`set_default_output`]. Independent instances can be passed to the `*_for`
/// methods of styles and printers, notably in tests.
///
///
/// # Concurrency
///
/// The toggle is an atomic flag read and written with relaxed ordering: The
/// last writer wins, and concurrent renders may observe either state. Since the
/// toggle only gates escape sequences, the text payload is never affected.
/// Output is guarded by a mutex. Each [`Console::write`] holds the lock for
/// the entire block of text, so writes from different threads never
/// interleave. Replacing the output while other threads write only races over
/// which destination receives a block.
pub struct Console {
    styling: AtomicBool,
    output: Mutex<Output>,
}

impl Console {
    /// Create a new console with styling enabled that writes to standard
    /// output.
    pub fn new() -> Self {
        Self::with_output(Box::new(std::io::stdout()))
    }

    /// Create a new console with styling enabled that writes to the given
    /// output.
    pub fn with_output(output: Output) -> Self {
        Self {
            styling: AtomicBool::new(true),
            output: Mutex::new(output),
        }
    }

    /// Get the global console.
    ///
    /// The global console is created on first access, with styling enabled and
    /// standard output as destination.
    pub fn global() -> &'static Console {
        static GLOBAL: OnceLock<Console> = OnceLock::new();
        GLOBAL.get_or_init(Console::new)
    }

    /// Determine whether styling is enabled.
    pub fn is_styling_enabled(&self) -> bool {
        self.styling.load(Ordering::Relaxed)
    }

    /// Enable styling. Enabling an enabled console has no further effect.
    pub fn enable_styling(&self) {
        self.set_styling(true);
    }

    /// Disable styling. Disabling a disabled console has no further effect.
    pub fn disable_styling(&self) {
        self.set_styling(false);
    }

    /// Enable or disable styling.
    pub fn set_styling(&self, enabled: bool) {
        let previous = self.styling.swap(enabled, Ordering::Relaxed);
        if previous != enabled {
            tracing::debug!(enabled, "changed styling");
        }
    }

    /// Enable or disable styling based on the runtime environment.
    ///
    /// This method determines the fidelity with
    /// [`Fidelity::from_environment`], checking whether standard output is a
    /// terminal, and disables styling if the fidelity is
    /// [`Fidelity::Plain`]. Otherwise, it enables styling. It returns the
    /// fidelity, which applications may use to [`cap`](crate::Style::cap) their
    /// styles.
    pub fn apply_environment(&self) -> Fidelity {
        self.apply_environment_with(&Env::default(), std::io::stdout().is_terminal())
    }

    pub(crate) fn apply_environment_with(
        &self,
        env: &impl Environment,
        has_tty: bool,
    ) -> Fidelity {
        let fidelity = fidelity_from_environment(env, has_tty);
        tracing::debug!(?fidelity, has_tty, "applying environment");
        self.set_styling(fidelity != Fidelity::Plain);
        fidelity
    }

    /// Replace the output destination, returning the previous one.
    pub fn set_output(&self, output: Output) -> Output {
        tracing::debug!("replacing output");
        std::mem::replace(&mut *self.lock(), output)
    }

    /// Write the text to the output and flush it.
    ///
    /// The entire text is written while holding the output lock. Upon
    /// success, this method returns the number of bytes written, which always
    /// is the text's length.
    pub fn write(&self, text: &str) -> Result<usize> {
        let mut output = self.lock();
        output.write_all(text.as_bytes())?;
        output.flush()?;
        Ok(text.len())
    }

    fn lock(&self) -> MutexGuard<'_, Output> {
        self.output.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("styling", &self.is_styling_enabled())
            .finish_non_exhaustive()
    }
}

// ----------------------------------------------------------------------------------------------------------

/// Enable styling for the global console.
pub fn enable_styling() {
    Console::global().enable_styling();
}

/// Disable styling for the global console.
///
/// Until styling is enabled again, all renders consulting the global console,
/// on all threads, return their text without escape sequences.
pub fn disable_styling() {
    Console::global().disable_styling();
}

/// Determine whether the global console has styling enabled.
pub fn is_styling_enabled() -> bool {
    Console::global().is_styling_enabled()
}

/// Replace the global console's output destination, returning the previous
/// one.
pub fn set_default_output(output: Output) -> Output {
    Console::global().set_output(output)
}

// ----------------------------------------------------------------------------------------------------------
