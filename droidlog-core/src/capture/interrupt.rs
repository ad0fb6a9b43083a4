use crate::error::Result;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

static CTRL_C: OnceCell<Arc<AtomicBool>> = OnceCell::new();

/// A cloneable "stop now" flag polled by the capture loops.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    flag: Arc<AtomicBool>,
}

impl Interrupt {
    /// Returns the flag wired to the process Ctrl+C handler, registering the
    /// handler on first use. The flag is cleared on every call so that each
    /// supervised run starts fresh.
    pub fn install() -> Result<Self> {
        let flag = CTRL_C.get_or_try_init(|| -> Result<_> {
            let flag = Arc::new(AtomicBool::new(false));
            let handler_flag = flag.clone();
            ctrlc::set_handler(move || {
                handler_flag.store(true, Ordering::SeqCst);
            })?;
            tracing::debug!("interrupt handler installed");
            Ok(flag)
        })?;

        flag.store(false, Ordering::SeqCst);
        Ok(Self { flag: flag.clone() })
    }

    /// A flag that no signal will ever set; only [`Interrupt::trigger`] does.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn trigger(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_triggered(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
