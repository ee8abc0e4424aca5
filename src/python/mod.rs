//! Python bindings for the Cathedral engine.
//!
//! # Quick Start
//!
//! ```python
//! import cathedral_engine as ce
//!
//! game = ce.CathedralGame()
//! game.apply_action(game.legal_actions()[0])
//!
//! planes = game.observation(ce.PlayerId(1))   # numpy float32 [17, 10, 10]
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// cathedral_engine: rule engine for the Cathedral board game.
#[pymodule]
fn cathedral_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayerId>()?;
    m.add_class::<PyCathedralGame>()?;

    Ok(())
}
