//! [dataplot]'s chart library.
//!
//! [dataplot]: https://github.com/dataplot
//!
//! It maps an immutable dataset onto a retained SVG scene: scales derive
//! the data-to-pixel mapping, marks bind one visual primitive per record,
//! axes derive ticks and labels from the same scales, and the hover model
//! drives a single shared tooltip element. The `render` module writes the
//! scene as a self-contained HTML document.

pub mod axis;
pub mod cycling;
pub mod gdp;
pub mod mark;
pub mod render;
pub mod scale;
pub mod scene;
pub mod tooltip;

pub use render::OutputStream;
pub use render::Render;
pub use render::output::OutputFile;
pub use render::page::Page;
pub use scene::SvgScene;
