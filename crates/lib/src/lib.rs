pub mod chunk;
pub mod cli;
pub mod env;
pub mod ext;
pub mod input;

mod macros;

#[doc(hidden)]
pub mod macro_support {
    pub use anyhow::Error;
}

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::chunk::{chunker, Grouping};
    pub use crate::ext::SliceExt;
    pub use crate::input::{IStr, Split, Trim, W};
    pub use anyhow::{anyhow, bail, ensure, Context, Error, Result};
    pub use arrayvec::ArrayVec;
    pub use bstr::{BStr, ByteSlice};
    pub use log::{debug, info, warn};
}
