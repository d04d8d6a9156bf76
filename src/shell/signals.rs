//! Terminal signal handling while a child runs.
//!
//! Ctrl-C in a terminal is delivered to the whole foreground process group,
//! so both the launcher and its child receive it. The child decides what an
//! interrupt means; the launcher keeps waiting so it can still relay the
//! child's final status.

/// Ignores SIGINT and SIGQUIT for as long as the guard is alive.
///
/// Install this only after the child has been spawned: ignored dispositions
/// survive `exec`, and the child must keep the default ones.
#[must_use = "interrupts are restored as soon as the guard is dropped"]
pub struct IgnoreInterrupts {
    #[cfg(unix)]
    previous: Vec<(libc::c_int, libc::sighandler_t)>,
}

#[cfg(unix)]
const SIGNALS: [libc::c_int; 2] = [libc::SIGINT, libc::SIGQUIT];

impl IgnoreInterrupts {
    /// Start ignoring terminal interrupts.
    #[cfg(unix)]
    pub fn install() -> Self {
        let mut previous = Vec::with_capacity(SIGNALS.len());
        for signal in SIGNALS {
            // SAFETY: signal() with SIG_IGN installs no Rust code as a handler;
            // it only changes the kernel disposition for this process.
            let prev = unsafe { libc::signal(signal, libc::SIG_IGN) };
            if prev == libc::SIG_ERR {
                tracing::warn!("Could not ignore signal {} while waiting", signal);
            } else {
                previous.push((signal, prev));
            }
        }
        Self { previous }
    }

    /// No terminal signals to manage on this platform.
    #[cfg(not(unix))]
    pub fn install() -> Self {
        Self {}
    }
}

#[cfg(unix)]
impl Drop for IgnoreInterrupts {
    fn drop(&mut self) {
        for &(signal, prev) in &self.previous {
            // SAFETY: restores a disposition previously returned by signal().
            unsafe {
                libc::signal(signal, prev);
            }
        }
    }
}
