//! Application state

use std::cell::RefCell;
use std::rc::Rc;

use crate::ui::components::Indicator;
use crate::ui::primitives::SeekBar;

/// Demo screen state
pub struct App {
    pub seek_bar: SeekBar,
    /// Shared with the seek bar's observer callbacks
    pub indicator: Rc<RefCell<Indicator>>,
}
