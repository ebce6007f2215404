//! # csscolor
//!
//! csscolor previews CSS colors in text editors. Given a color in hashed
//! hexadecimal notation, as a percentage triple, or by name, it computes the
//! GUI colors as well as the closest 8-bit terminal colors and defines the
//! corresponding highlight groups in the host editor.
//!
//!
//! ## 1. Overview
//!
//! csscolor's main abstractions are:
//!
//!   * [`Rgb`](termco::Rgb) is the **RGB triple** all color math operates on.
//!     [`code_to_rgb`], [`percentage_to_rgb`], and [`rgb_to_code`] convert
//!     between triples and their textual formats, while [`calc_fg`] picks a
//!     legible foreground color for a background.
//!   * The [`termco`] module models the **terminal palette** of 254 colors as
//!     the 16 [`AnsiColor`](termco::AnsiColor)s, the
//!     [`EmbeddedRgb`](termco::EmbeddedRgb) color cube, and the
//!     [`GrayGradient`](termco::GrayGradient).
//!   * [`Translator`] finds the **closest palette color** for an RGB triple
//!     and caches its answers.
//!   * [`Emitter`] turns colors into **highlight directives** for a
//!     [`Host`](host::Host) editor, configured through
//!     [`Options`](opt::Options).
//!
//!
//! ## 2. Example
//!
//! ```
//! # use csscolor::Emitter;
//! # use csscolor::host::ScriptWriter;
//! let mut emitter = Emitter::new(ScriptWriter::new(Vec::new()));
//! emitter.add_syntax_keyword("#FFA500", "orange")?;
//!
//! let script = String::from_utf8(emitter.into_host().into_inner()?)
//!     .map_err(std::io::Error::other)?;
//! assert_eq!(script, "\
//! syn keyword cssColorFFA500 orange contained
//! syn cluster cssColors add=cssColorFFA500
//! hi cssColorFFA500 guifg=#000000 guibg=#FFA500 ctermfg=0 ctermbg=214
//! ");
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! csscolor supports one feature flag:
//!
//!   - **`pyffi`** controls csscolor's Python integration through
//!     [PyO3](https://pyo3.rs/). It exposes [`percentage_to_code`] and an
//!     emitter that forwards directives to a Python callable such as Vim's
//!     `vim.command`. This feature is disabled by default.
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade. It never
//! installs a logger itself.

mod contrast;
mod emit;
pub mod error;
pub mod host;
pub mod named;
pub mod opt;
mod string;
pub mod termco;
mod trans;

#[cfg(feature = "pyffi")]
mod pyffi;

pub use contrast::calc_fg;
pub use emit::Emitter;
pub use string::{code_to_rgb, percentage_to_code, percentage_to_rgb, rgb_to_code};
pub use trans::{index_to_rgb, CacheStats, Palette, Translator};

#[cfg(feature = "pyffi")]
pub use pyffi::csscolor;
